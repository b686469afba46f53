use crate::core::display::{render_menu, render_order};
use crate::core::{Console, Menu, MenuItem, Order, Price, Result, SortKey};
use crate::utils::input::Reply;

/// Owns the menu and the order for the whole session.
///
/// Every interactive operation borrows the console for its duration only.
#[derive(Debug, Clone)]
pub struct OrderingSystem {
    menu: Menu,
    order: Order,
    currency: String,
}

impl OrderingSystem {
    pub fn new(menu: Menu, currency: impl Into<String>) -> Self {
        Self {
            menu,
            order: Order::new(),
            currency: currency.into(),
        }
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn order(&self) -> &Order {
        &self.order
    }

    fn write_lines<C: Console>(console: &mut C, lines: &[String]) -> Result<()> {
        for line in lines {
            console.write_line(line)?;
        }
        Ok(())
    }

    pub fn display_menu<C: Console>(&self, console: &mut C) -> Result<()> {
        Self::write_lines(console, &render_menu(&self.menu, &self.currency))
    }

    pub fn display_order<C: Console>(&self, console: &mut C) -> Result<()> {
        Self::write_lines(console, &render_order(&self.order, &self.currency))
    }

    /// Asks for 1 (name) or 2 (price); anything else sorts by price.
    pub fn sort_menu<C: Console>(&mut self, console: &mut C) -> Result<()> {
        console.write_line("Sort menu by:")?;
        console.write_line("1. Name")?;
        console.write_line("2. Price")?;
        console.prompt("Choice: ")?;

        let key = match Reply::from_read(console.read_number::<i64>())? {
            Reply::Value(choice) => SortKey::from_choice(choice),
            Reply::Rejected => None,
            Reply::Closed => return Ok(()),
        };

        let key = match key {
            Some(key) => key,
            None => {
                console.write_line("Invalid choice. Sorting by price by default.")?;
                SortKey::default()
            }
        };

        self.menu.sort(key);
        tracing::debug!("Menu sorted by {:?}", key);
        console.write_line("Menu sorted.")?;
        Ok(())
    }

    /// Keeps asking for menu numbers until `0` (or end of input).
    ///
    /// Bad input is rejected and asked for again.
    pub fn take_order<C: Console>(&mut self, console: &mut C) -> Result<()> {
        console.write_line("")?;
        console.write_line("Enter the number of the item you want to order (0 to finish):")?;

        loop {
            console.prompt("> ")?;

            let choice = match Reply::from_read(console.read_number::<i64>())? {
                Reply::Value(choice) => choice,
                Reply::Rejected => {
                    console.write_line("Invalid input. Please enter a valid number.")?;
                    continue;
                }
                Reply::Closed => break,
            };

            if choice == 0 {
                break;
            }

            let selected = usize::try_from(choice)
                .ok()
                .and_then(|index| self.menu.get(index))
                .cloned();

            match selected {
                Some(item) => {
                    console.write_line(&format!("Added {} to your order.", item.name))?;
                    tracing::debug!("Order now has {} items", self.order.len() + 1);
                    self.order.add(item);
                }
                None => console.write_line("Invalid input. Please enter a valid number.")?,
            }
        }

        Ok(())
    }

    /// Reads a free-text name and a price and appends the item. One attempt only.
    pub fn add_menu_item<C: Console>(&mut self, console: &mut C) -> Result<()> {
        console.write_line("")?;
        console.prompt("Enter the name of the new item: ")?;
        let name = match Reply::from_read(console.read_line())? {
            Reply::Value(name) => name,
            Reply::Rejected => {
                console.write_line("Invalid name. Item not added.")?;
                return Ok(());
            }
            Reply::Closed => return Ok(()),
        };

        console.prompt("Enter the price of the item: ")?;
        let price = match Reply::from_read(console.read_number::<Price>())? {
            Reply::Value(price) => price,
            Reply::Rejected => {
                console.write_line("Invalid price. Item not added.")?;
                return Ok(());
            }
            Reply::Closed => return Ok(()),
        };

        tracing::debug!("Adding menu item {:?} at {}", name, price);
        self.menu.push(MenuItem::new(name, price));
        console.write_line("Item added to the menu.")?;
        Ok(())
    }

    /// Shows the menu and removes one entry by number. Invalid numbers are not retried.
    pub fn remove_menu_item<C: Console>(&mut self, console: &mut C) -> Result<()> {
        self.display_menu(console)?;
        console.write_line("")?;
        console.prompt("Enter the number of the item to remove: ")?;

        let removed = match Reply::from_read(console.read_number::<i64>())? {
            Reply::Value(choice) => usize::try_from(choice)
                .ok()
                .and_then(|index| self.menu.remove(index)),
            Reply::Rejected => None,
            Reply::Closed => return Ok(()),
        };

        match removed {
            Some(item) => {
                tracing::debug!("Removed menu item {:?}", item.name);
                console.write_line(&format!("Removed {} from the menu.", item.name))?;
            }
            None => console.write_line("Invalid choice.")?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ScriptedConsole;

    fn item(name: &str, price: &str) -> MenuItem {
        MenuItem::new(name, price.parse().unwrap())
    }

    fn system_with(items: Vec<MenuItem>) -> OrderingSystem {
        OrderingSystem::new(Menu::from_items(items), "$")
    }

    fn names(menu: &Menu) -> Vec<&str> {
        menu.items().iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn test_take_order_single_item_then_stop() {
        let mut system = system_with(vec![item("Tea", "20"), item("Cake", "75.5")]);
        let mut console = ScriptedConsole::new(["1", "0"]);

        system.take_order(&mut console).unwrap();

        assert_eq!(system.order().items(), &[item("Tea", "20")]);
        assert!(console.transcript().contains("Added Tea to your order."));
        assert_eq!(console.remaining_input(), 0);
    }

    #[test]
    fn test_take_order_rejects_non_numeric_and_retries() {
        let mut system = system_with(vec![item("Tea", "20")]);
        let mut console = ScriptedConsole::new(["abc", "1", "0"]);

        system.take_order(&mut console).unwrap();

        assert_eq!(system.order().len(), 1);
        let transcript = console.transcript();
        assert_eq!(
            transcript
                .matches("Invalid input. Please enter a valid number.")
                .count(),
            1
        );
        assert!(transcript.contains("Added Tea to your order."));
    }

    #[test]
    fn test_take_order_rejects_out_of_range_and_negative() {
        let mut system = system_with(vec![item("Tea", "20")]);
        let mut console = ScriptedConsole::new(["2", "-1", "0"]);

        system.take_order(&mut console).unwrap();

        assert!(system.order().is_empty());
        assert_eq!(
            console
                .transcript()
                .matches("Invalid input. Please enter a valid number.")
                .count(),
            2
        );
    }

    #[test]
    fn test_take_order_ends_on_closed_input() {
        let mut system = system_with(vec![item("Tea", "20")]);
        let mut console = ScriptedConsole::new(["1"]);

        system.take_order(&mut console).unwrap();

        assert_eq!(system.order().len(), 1);
    }

    #[test]
    fn test_sort_menu_choices() {
        let mut system = system_with(vec![item("Pizza", "159.99"), item("Burger", "199.99")]);

        system.sort_menu(&mut ScriptedConsole::new(["1"])).unwrap();
        assert_eq!(names(system.menu()), ["Burger", "Pizza"]);

        system.sort_menu(&mut ScriptedConsole::new(["2"])).unwrap();
        assert_eq!(names(system.menu()), ["Pizza", "Burger"]);
    }

    #[test]
    fn test_sort_menu_invalid_choice_sorts_by_price() {
        let mut by_invalid = system_with(vec![item("Burger", "199.99"), item("Pizza", "159.99")]);
        let mut by_price = by_invalid.clone();

        let mut console = ScriptedConsole::new(["9"]);
        by_invalid.sort_menu(&mut console).unwrap();
        by_price.sort_menu(&mut ScriptedConsole::new(["2"])).unwrap();

        assert_eq!(by_invalid.menu(), by_price.menu());
        assert!(console
            .transcript()
            .contains("Invalid choice. Sorting by price by default."));
        assert!(console.transcript().ends_with("Menu sorted.\n"));

        let mut by_text = system_with(vec![item("Burger", "199.99"), item("Pizza", "159.99")]);
        by_text.sort_menu(&mut ScriptedConsole::new(["name"])).unwrap();
        assert_eq!(by_text.menu(), by_price.menu());
    }

    #[test]
    fn test_add_menu_item_appends_with_spaces_in_name() {
        let mut system = system_with(vec![item("Tea", "20")]);
        let mut console = ScriptedConsole::new(["Fish and Chips", "12.5"]);

        system.add_menu_item(&mut console).unwrap();

        assert_eq!(system.menu().get(2), Some(&item("Fish and Chips", "12.5")));
        assert!(console.transcript().contains("Item added to the menu."));
    }

    #[test]
    fn test_add_menu_item_invalid_price_leaves_menu() {
        let mut system = system_with(vec![item("Tea", "20")]);
        let mut console = ScriptedConsole::new(["Cake", "cheap"]);

        system.add_menu_item(&mut console).unwrap();

        assert_eq!(system.menu().len(), 1);
        assert!(console.transcript().contains("Invalid price. Item not added."));
    }

    #[test]
    fn test_remove_menu_item_shifts_indices() {
        let mut system = system_with(vec![item("Tea", "20"), item("Cake", "75.5"), item("Soda", "5")]);
        let mut console = ScriptedConsole::new(["1"]);

        system.remove_menu_item(&mut console).unwrap();

        assert_eq!(names(system.menu()), ["Cake", "Soda"]);
        assert!(console.transcript().contains("Removed Tea from the menu."));
    }

    #[test]
    fn test_remove_menu_item_invalid_index_is_single_attempt() {
        for input in ["0", "4", "-2", "abc"] {
            let mut system = system_with(vec![item("Tea", "20"), item("Cake", "75.5"), item("Soda", "5")]);
            let mut console = ScriptedConsole::new([input, "1"]);

            system.remove_menu_item(&mut console).unwrap();

            assert_eq!(system.menu().len(), 3, "input {:?}", input);
            assert!(console.transcript().contains("Invalid choice."));
            assert_eq!(console.remaining_input(), 1);
        }
    }

    #[test]
    fn test_order_survives_menu_removal() {
        let mut system = system_with(vec![item("Tea", "20")]);
        system.take_order(&mut ScriptedConsole::new(["1", "0"])).unwrap();
        system.remove_menu_item(&mut ScriptedConsole::new(["1"])).unwrap();

        assert!(system.menu().is_empty());
        let mut console = ScriptedConsole::new(Vec::<String>::new());
        system.display_order(&mut console).unwrap();
        assert!(console.transcript().contains("Total               $20.00"));
    }
}
