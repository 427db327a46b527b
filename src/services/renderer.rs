use rust_decimal::Decimal;

use crate::constants::{icon_for_base, symbol_for_quote};
use crate::models::{Frame, PairKey};

/// Assembles the ordered three-unit display list: base currency label,
/// price with currency suffix, then the sparkline.
pub fn build_frames(pair: &PairKey, price: Decimal, normalized: Vec<f64>) -> Vec<Frame> {
    let icon = icon_for_base(&pair.base);

    vec![
        Frame::Label {
            icon: icon.to_string(),
            text: pair.base.clone(),
        },
        Frame::Value {
            icon: icon.to_string(),
            text: format!("{}{}", format_price(price), symbol_for_quote(&pair.quote)),
        },
        Frame::Graph {
            chart_data: normalized,
        },
    ]
}

/// Shortest decimal rendering with a guaranteed decimal point, so the
/// device shows "3000.0" rather than "3000.00" or "3000".
fn format_price(price: Decimal) -> String {
    let rendered = price.normalize().to_string();
    if rendered.contains('.') {
        rendered
    } else {
        format!("{rendered}.0")
    }
}
