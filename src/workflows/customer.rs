//! Customer lookup, listing and creation.

use super::Session;
use crate::domain::{BirthDate, EmailAddress, PhoneNumber};
use crate::error::SessionResult;
use crate::models::{Customer, Sheet};
use crate::navigation::{Console, NavHint, Navigation, Step, StepOutcome};
use crate::store::RecordStore;
use tracing::info;

impl<S: RecordStore, C: Console> Session<S, C> {
    /// Customers menu: view customers or build the statistics report.
    pub fn customers_menu(&mut self) -> SessionResult<Navigation<()>> {
        let step = Step::new("press 1 - View customers\n\tpress 2 - Stats\n\t")
            .indent("\t")
            .hint(NavHint::Back);
        self.step(&step, |session, input| match input {
            "1" => Ok(session.view_customer()?.stay_unless_home()),
            "2" => {
                session.customer_stats()?;
                Ok(StepOutcome::Stay)
            }
            _ => Ok(StepOutcome::Invalid),
        })
    }

    /// Print one customer by name, or everyone for `all`.
    pub fn view_customer(&mut self) -> SessionResult<Navigation<()>> {
        let customers = self.customers()?;
        let names: Vec<String> = customers.iter().map(|c| c.name.clone()).collect();

        let step = Step::new("Enter 'all' to see the full list\n\t\tOr enter a name to search by name: ")
            .indent("\t\t")
            .hint(NavHint::BackAndHome)
            .warning("Customer doesn't exist.");
        self.step(&step, |session, input| {
            if let Some(customer) = customers.iter().find(|c| c.name == input) {
                session.print_customer(customer)?;
                return Ok(StepOutcome::Value(()));
            }
            if input == "all" {
                for customer in &customers {
                    session.print_customer(customer)?;
                }
                return Ok(StepOutcome::Value(()));
            }
            session.suggest_names("\t\t", input, &names)?;
            Ok(StepOutcome::Invalid)
        })
    }

    fn print_customer(&mut self, customer: &Customer) -> SessionResult<()> {
        self.framed([
            format!(
                "\t{} - {}, birthday: {}",
                customer.name, customer.phone, customer.birth_date
            ),
            format!(
                "\tbookings history: {}, cancelled: {}",
                customer.bookings, customer.cancelled
            ),
        ])
    }

    /// An existing customer by name, or a newly created one.
    ///
    /// An unknown name offers to create the customer; declining asks for a
    /// name again.
    pub fn find_customer(&mut self) -> SessionResult<Navigation<Customer>> {
        let step = Step::new("Enter a customer's name: ")
            .indent("\t")
            .hint(NavHint::BackAndHome);
        self.step(&step, |session, name| {
            if name.trim().is_empty() {
                return Ok(StepOutcome::Invalid);
            }
            if let Some(customer) = session.customer_named(name)? {
                return Ok(StepOutcome::Value(customer));
            }

            session.print(&format!("\tCustomer '{}' does not exist.", name))?;
            let names: Vec<String> = session
                .customers()?
                .into_iter()
                .map(|c| c.name)
                .collect();
            session.suggest_names("\t", name, &names)?;

            loop {
                let answer =
                    session.read_line(&format!("\tCreate a new customer '{}'? y/n\n\t", name))?;
                match answer.as_str() {
                    "y" => return Ok(session.create_customer(name)?.into_outcome()),
                    "n" => return Ok(StepOutcome::Stay),
                    _ => session.print("\n\tInvalid input. Please, use options above.\n")?,
                }
            }
        })
    }

    /// A validated contact phone number.
    pub fn new_phone(&mut self) -> SessionResult<Navigation<PhoneNumber>> {
        let step = Step::new("Contact number: ")
            .indent("\t\t")
            .warning("Invalid input. Please, enter a valid phone number.");
        self.step(&step, |_, input| Ok(PhoneNumber::new(input).ok().into()))
    }

    /// A validated email address.
    pub fn new_email(&mut self) -> SessionResult<Navigation<EmailAddress>> {
        let step = Step::new("Email to receive reminders: ")
            .indent("\t\t")
            .warning("Invalid input. Please, enter a valid email.");
        self.step(&step, |_, input| Ok(EmailAddress::new(input).ok().into()))
    }

    /// A birth date accepted by the configured policy.
    pub fn new_birthdate(&mut self) -> SessionResult<Navigation<BirthDate>> {
        let step = Step::new("Date of birth: ")
            .indent("\t\t")
            .warning("Invalid input. Please, enter a valid date.");
        self.step(&step, |session, input| {
            Ok(BirthDate::parse_on(input, session.birth_date_policy, session.today)
                .ok()
                .into())
        })
    }

    /// Create and save a customer called `name`.
    ///
    /// The customer is returned even when the user chose not to save after a
    /// store failure, so the booking in progress can go on.
    pub fn create_customer(&mut self, name: &str) -> SessionResult<Navigation<Customer>> {
        self.print("\n\t\tCreate a new customer:")?;
        let phone = step_value!(self.new_phone()?);
        let email = step_value!(self.new_email()?);
        let birth_date = step_value!(self.new_birthdate()?);

        let customer = Customer::new(name, &phone, &email, birth_date);
        if self.append(Sheet::Customers, &customer.to_record())? {
            info!("Created customer '{}'", customer.name);
        }
        Ok(Navigation::Value(customer))
    }
}
