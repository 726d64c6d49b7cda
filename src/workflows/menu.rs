//! Start menu and the top-level session loop.

use super::Session;
use crate::error::SessionResult;
use crate::models::Staff;
use crate::navigation::Console;
use crate::store::RecordStore;
use tracing::{debug, info};

impl<S: RecordStore, C: Console> Session<S, C> {
    /// The start menu. Every submenu returns here, whether it was left step
    /// by step or with the home token; the cancel token exits.
    pub fn start_menu(&mut self, user: &mut Staff) -> SessionResult<()> {
        let exit = self.navigator.cancel_token().to_string();
        let prompt = format!(
            "press 1 - Bookings\npress 2 - Customers\npress 3 - Staff info\npress {} - Exit\n",
            exit
        );

        loop {
            self.print(&format!("\nWhat do you want to do, {}?", user.name))?;
            let choice = self.read_line(&prompt)?;
            let outcome = match choice.as_str() {
                "1" => self.bookings_menu(user)?,
                "2" => self.customers_menu()?,
                "3" => self.staff_menu(user)?,
                other if other == exit => {
                    info!("'{}' left the desk", user.name);
                    return Ok(());
                }
                _ => {
                    self.print("Invalid input. Please, use options above.\n")?;
                    continue;
                }
            };
            debug!("Back at the start menu after {:?}", outcome);
        }
    }

    /// Log in and run the start menu until the user exits.
    pub fn run(&mut self) -> SessionResult<Staff> {
        let mut user = self.staff_login()?;
        self.start_menu(&mut user)?;
        Ok(user)
    }
}
