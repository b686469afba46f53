use crate::core::{Menu, Order};

const INDEX_WIDTH: usize = 4;
const NAME_WIDTH: usize = 20;
const MENU_RULE: usize = 34;
const ORDER_RULE: usize = 30;

/// Numbered menu listing, one line per entry.
pub fn render_menu(menu: &Menu, currency: &str) -> Vec<String> {
    let mut lines = vec![
        String::new(),
        "Menu:".to_string(),
        format!(
            "{:<iw$}{:<nw$}{}",
            "No",
            "Item",
            "Price",
            iw = INDEX_WIDTH,
            nw = NAME_WIDTH
        ),
        "-".repeat(MENU_RULE),
    ];

    lines.extend(menu.items().iter().enumerate().map(|(i, item)| {
        format!(
            "{:<iw$}{:<nw$}{}{}",
            i + 1,
            item.name,
            currency,
            item.price,
            iw = INDEX_WIDTH,
            nw = NAME_WIDTH
        )
    }));

    lines
}

/// Order listing with a total line; an empty order only gets a notice.
pub fn render_order(order: &Order, currency: &str) -> Vec<String> {
    let mut lines = vec![String::new(), "Your order:".to_string()];

    if order.is_empty() {
        lines.push("No items ordered.".to_string());
        return lines;
    }

    lines.push(format!("{:<nw$}{}", "Item", "Price", nw = NAME_WIDTH));
    lines.push("-".repeat(ORDER_RULE));
    for item in order.items() {
        lines.push(format!(
            "{:<nw$}{}{}",
            item.name,
            currency,
            item.price,
            nw = NAME_WIDTH
        ));
    }
    lines.push("-".repeat(ORDER_RULE));
    match order.total() {
        Some(total) => lines.push(format!(
            "{:<nw$}{}{}",
            "Total",
            currency,
            total,
            nw = NAME_WIDTH
        )),
        None => {
            tracing::warn!("Order total of {} items overflowed", order.len());
            lines.push(format!("{:<nw$}{}", "Total", "too large to display", nw = NAME_WIDTH));
        }
    }

    lines
}
