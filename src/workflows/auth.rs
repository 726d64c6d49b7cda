//! Staff login.

use super::Session;
use crate::error::SessionResult;
use crate::models::Staff;
use crate::navigation::Console;
use crate::store::RecordStore;
use tracing::{info, warn};

impl<S: RecordStore, C: Console> Session<S, C> {
    /// Ask for `user`'s password, up to the configured number of attempts.
    pub fn authorise(&mut self, user: &Staff) -> SessionResult<bool> {
        let attempts = self.max_password_attempts;
        for attempt in 1..=attempts {
            self.print(&format!("Attempt {} of {}", attempt, attempts))?;
            let password = self.read_secret("Password: ")?;
            if user.check_password(&password) {
                self.print("All good!\n")?;
                return Ok(true);
            }
            warn!(
                "Wrong password for '{}' (attempt {} of {})",
                user.name, attempt, attempts
            );
            self.print("The password is not correct! Try again!\n")?;
        }
        Ok(false)
    }

    /// Log a member of staff in, or sign up a new one.
    ///
    /// Loops until someone gets in: a known name needs its password, `new`
    /// starts staff creation, anything else gets a hint and the question again.
    pub fn staff_login(&mut self) -> SessionResult<Staff> {
        self.print("\n\n\t\tWelcome to Your Booking System!\n")?;
        loop {
            let entered = self.read_line(
                "\nEnter your name or enter 'new' if you are a new member of staff: ",
            )?;
            let staff = self.staff_members()?;

            if let Some(user) = staff.iter().find(|member| member.name == entered) {
                if self.authorise(user)? {
                    info!("'{}' logged in", user.name);
                    return Ok(user.clone());
                }
                continue;
            }

            if entered.eq_ignore_ascii_case("new") {
                if let Some(user) = self.create_staff(&staff)? {
                    info!("New member of staff '{}' logged in", user.name);
                    return Ok(user);
                }
                continue;
            }

            self.print(&format!("Sorry, there is no user '{}'.", entered))?;
            let names: Vec<String> = staff.into_iter().map(|member| member.name).collect();
            self.suggest_names("", &entered, &names)?;
            self.print("If you want to create a new user, enter 'new'.\n")?;
        }
    }
}
