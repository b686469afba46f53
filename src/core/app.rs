use crate::core::system::OrderingSystem;
use crate::core::{Console, Result};
use crate::utils::input::Reply;

/// Commands of the main menu, numbered 1 to 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    DisplayMenu,
    TakeOrder,
    DisplayOrder,
    AddMenuItem,
    RemoveMenuItem,
    SortMenu,
    Exit,
}

impl Command {
    pub const ALL: [Command; 7] = [
        Command::DisplayMenu,
        Command::TakeOrder,
        Command::DisplayOrder,
        Command::AddMenuItem,
        Command::RemoveMenuItem,
        Command::SortMenu,
        Command::Exit,
    ];

    pub fn from_selector(selector: i64) -> Option<Self> {
        let index = usize::try_from(selector).ok()?.checked_sub(1)?;
        Self::ALL.get(index).copied()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Command::DisplayMenu => "Display Menu",
            Command::TakeOrder => "Take Order",
            Command::DisplayOrder => "Display Order",
            Command::AddMenuItem => "Add Menu Item",
            Command::RemoveMenuItem => "Remove Menu Item",
            Command::SortMenu => "Sort Menu",
            Command::Exit => "Exit",
        }
    }
}

/// Drives the main command loop over a console.
pub struct MenuApp<C: Console> {
    system: OrderingSystem,
    console: C,
}

impl<C: Console> MenuApp<C> {
    pub fn new(system: OrderingSystem, console: C) -> Self {
        Self { system, console }
    }

    pub fn system(&self) -> &OrderingSystem {
        &self.system
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn into_console(self) -> C {
        self.console
    }

    fn show_commands(&mut self) -> Result<()> {
        self.console.write_line("")?;
        self.console.write_line("Food Ordering System")?;
        for (i, command) in Command::ALL.iter().enumerate() {
            self.console
                .write_line(&format!("{}. {}", i + 1, command.label()))?;
        }
        self.console.prompt("Enter your choice: ")
    }

    /// Runs until `Exit` is chosen or input ends.
    pub fn run(&mut self) -> Result<()> {
        tracing::info!("Starting food ordering session");

        loop {
            self.show_commands()?;

            let command = match Reply::from_read(self.console.read_number::<i64>())? {
                Reply::Value(selector) => Command::from_selector(selector),
                Reply::Rejected => None,
                Reply::Closed => {
                    tracing::debug!("Input closed, leaving the session");
                    return Ok(());
                }
            };

            match command {
                Some(Command::Exit) => {
                    self.console.write_line("Exiting. Thank you!")?;
                    tracing::info!(
                        "Session finished with {} ordered items",
                        self.system.order().len()
                    );
                    return Ok(());
                }
                Some(command) => self.execute(command)?,
                None => self.console.write_line("Invalid choice. Please try again.")?,
            }
        }
    }

    /// Runs one command. `Exit` does nothing here; the loop handles it.
    pub fn execute(&mut self, command: Command) -> Result<()> {
        tracing::debug!("Executing {:?}", command);

        let console = &mut self.console;
        match command {
            Command::DisplayMenu => self.system.display_menu(console),
            Command::TakeOrder => self.system.take_order(console),
            Command::DisplayOrder => self.system.display_order(console),
            Command::AddMenuItem => self.system.add_menu_item(console),
            Command::RemoveMenuItem => self.system.remove_menu_item(console),
            Command::SortMenu => self.system.sort_menu(console),
            Command::Exit => Ok(()),
        }
    }
}
