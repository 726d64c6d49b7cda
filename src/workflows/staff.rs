//! Staff sign-up, listing and self-service edits.

use super::Session;
use crate::error::SessionResult;
use crate::models::{Sheet, Staff};
use crate::navigation::{Console, NavHint, Navigation, Step, StepOutcome};
use crate::store::RecordStore;

impl<S: RecordStore, C: Console> Session<S, C> {
    /// A name no current member of staff has. Blank names are refused.
    pub fn get_name(&mut self, existing: &[Staff]) -> SessionResult<Navigation<String>> {
        let step = Step::new("Enter a name for a new member of staff: ");
        self.step(&step, |session, name| {
            if name.trim().is_empty() {
                session.print("Please, enter your name!\n")?;
                return Ok(StepOutcome::Stay);
            }
            if existing.iter().any(|member| member.name == name) {
                session.print(&format!("'{}' already exists. Try something else.\n", name))?;
                return Ok(StepOutcome::Stay);
            }
            Ok(StepOutcome::Value(name.to_string()))
        })
    }

    /// Sign up a new member of staff: name, password and contact phone.
    ///
    /// `None` when the user backs out at any question.
    pub fn create_staff(&mut self, existing: &[Staff]) -> SessionResult<Option<Staff>> {
        if let Some(hint) = self.navigator.hint_text(NavHint::Back) {
            self.print(&format!("\n~ ~ {} ~ ~", hint))?;
        }
        let name = match self.get_name(existing)? {
            Navigation::Value(name) => name,
            _ => return Ok(None),
        };
        self.print(&format!("Hi, {}!", name))?;

        let password = loop {
            let password = self.read_secret("\n\tCreate a password: ")?;
            let navigator = &self.navigator;
            if password == navigator.cancel_token() || password == navigator.home_token() {
                return Ok(None);
            }
            if !password.is_empty() {
                break password;
            }
            self.print("\tThe password cannot be empty.")?;
        };

        let contact = match self.new_phone()? {
            Navigation::Value(phone) => phone,
            _ => return Ok(None),
        };

        let user = Staff {
            name,
            password,
            contact: contact.into_inner(),
        };
        self.append(Sheet::Staff, &user.to_record())?;
        Ok(Some(user))
    }

    /// Staff menu: list colleagues or edit your own details.
    pub fn staff_menu(&mut self, user: &mut Staff) -> SessionResult<Navigation<()>> {
        let step = Step::new("press 1 - Staff info\n\tpress 2 - Edit your info\n\t")
            .indent("\t")
            .hint(NavHint::Back);
        self.step(&step, |session, input| match input {
            "1" => Ok(session.staff_info_menu()?.stay_unless_home()),
            "2" => Ok(session.edit_staff_menu(user)?.stay_unless_home()),
            _ => Ok(StepOutcome::Invalid),
        })
    }

    /// Contacts of all staff, or of one member by name.
    pub fn staff_info_menu(&mut self) -> SessionResult<Navigation<()>> {
        let staff = self.staff_members()?;
        let names: Vec<String> = staff.iter().map(|member| member.name.clone()).collect();

        let step = Step::new("Enter 'all' to see the full list\n\t\tOr enter a name to search by name: ")
            .indent("\t\t")
            .hint(NavHint::BackAndHome);
        self.step(&step, |session, input| {
            let selected: Vec<&Staff> = if input == "all" {
                staff.iter().collect()
            } else {
                staff.iter().filter(|member| member.name == input).collect()
            };
            if selected.is_empty() {
                session.suggest_names("\t\t", input, &names)?;
                return Ok(StepOutcome::Invalid);
            }
            session.framed(
                selected
                    .iter()
                    .map(|member| format!("\t{} : {}", member.name, member.contact)),
            )?;
            Ok(StepOutcome::Value(()))
        })
    }

    /// Change the logged-in user's password or contact number.
    pub fn edit_staff_menu(&mut self, user: &mut Staff) -> SessionResult<Navigation<()>> {
        let step = Step::new("press 1 - Change password\n\t\tpress 2 - Change contact\n\t\t")
            .indent("\t\t")
            .hint(NavHint::BackAndHome);
        self.step(&step, |session, input| match input {
            "1" => {
                let password = session.read_secret("\n\t\tNew password: ")?;
                if password.is_empty() {
                    session.print("\t\tThe password cannot be empty.")?;
                    return Ok(StepOutcome::Stay);
                }
                session.update(Sheet::Staff, &user.key(), Staff::PASSWORD, &password)?;
                user.password = password;
                Ok(StepOutcome::Value(()))
            }
            "2" => match session.new_phone()? {
                Navigation::Value(phone) => {
                    session.update(Sheet::Staff, &user.key(), Staff::CONTACT, phone.as_str())?;
                    user.contact = phone.into_inner();
                    Ok(StepOutcome::Value(()))
                }
                other => Ok(other.stay_unless_home()),
            },
            _ => Ok(StepOutcome::Invalid),
        })
    }
}
