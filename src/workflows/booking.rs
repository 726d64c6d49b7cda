//! Booking workflows: listings, new bookings, confirmation, rescheduling and
//! cancellation.

use super::Session;
use crate::domain::{format_date, parse_date, BookingDate, BookingTime};
use crate::error::SessionResult;
use crate::models::booking::active;
use crate::models::{Booking, Customer, Sheet, Staff};
use crate::navigation::{Console, NavHint, Navigation, Step, StepOutcome};
use crate::store::RecordStore;
use chrono::{Days, NaiveDate};
use tracing::info;

/// Which days a booking listing covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Today,
    Tomorrow,
    /// Today and the six days after it.
    Week,
    /// Every active booking.
    All,
    Day(NaiveDate),
}

impl Period {
    /// Menu choice `1`-`4`.
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice {
            "1" => Some(Self::Today),
            "2" => Some(Self::Tomorrow),
            "3" => Some(Self::Week),
            "4" => Some(Self::All),
            _ => None,
        }
    }

    pub fn label(&self) -> String {
        match self {
            Self::Today => "today".to_string(),
            Self::Tomorrow => "tomorrow".to_string(),
            Self::Week => "the upcoming week".to_string(),
            Self::All => "all time".to_string(),
            Self::Day(day) => format_date(*day),
        }
    }

    pub fn contains(&self, day: NaiveDate, today: NaiveDate) -> bool {
        match self {
            Self::Today => day == today,
            Self::Tomorrow => today.checked_add_days(Days::new(1)) == Some(day),
            Self::Week => {
                day >= today && today.checked_add_days(Days::new(6)).is_some_and(|end| day <= end)
            }
            Self::All => true,
            Self::Day(selected) => day == *selected,
        }
    }
}

/// One listing line: `DD-MM - HH:MM - NAME (N ppl) added by STAFF status`.
pub fn booking_line(booking: &Booking) -> String {
    let day_month = booking.date.get(..5).unwrap_or(&booking.date);
    format!(
        "\t{} - {} - {} ({} ppl) added by {} {}",
        day_month,
        booking.time,
        booking.name,
        booking.people,
        booking.created_by,
        booking.status_symbol()
    )
}

impl<S: RecordStore, C: Console> Session<S, C> {
    /// Bookings dated today or later that are not cancelled.
    pub(crate) fn active_bookings(&mut self) -> SessionResult<Vec<Booking>> {
        let today = self.today;
        Ok(active(self.bookings()?, today))
    }

    /// Active bookings of one customer.
    pub fn customer_bookings(&mut self, name: &str) -> SessionResult<Vec<Booking>> {
        Ok(self
            .active_bookings()?
            .into_iter()
            .filter(|booking| booking.name == name)
            .collect())
    }

    /// Print the bookings that fall in `period`, sorted by date and time.
    ///
    /// In today's listing every unconfirmed booking is followed by the
    /// customer's phone number to call.
    pub fn print_bookings(&mut self, bookings: &[Booking], period: Period) -> SessionResult<()> {
        let today = self.today;
        let mut selected: Vec<&Booking> = bookings
            .iter()
            .filter(|booking| booking.day().is_some_and(|day| period.contains(day, today)))
            .collect();
        selected.sort_by_key(|booking| (booking.day(), booking.start_time()));

        let to_call = period == Period::Today && selected.iter().any(|b| !b.is_confirmed());
        let customers = if to_call { self.customers()? } else { Vec::new() };

        let mut lines = vec![format!(
            "\tYou have {} booking(s) for {}:\n",
            selected.len(),
            period.label()
        )];
        for booking in selected {
            lines.push(booking_line(booking));
            if to_call && !booking.is_confirmed() {
                let phone = customers
                    .iter()
                    .find(|c| c.name == booking.name)
                    .map_or("unknown", |c| c.phone.as_str());
                lines.push(format!("\t!!! confirm this booking: {}\n", phone));
            }
        }
        self.framed(lines)
    }

    /// Bookings menu: view, add or edit.
    pub fn bookings_menu(&mut self, user: &Staff) -> SessionResult<Navigation<()>> {
        let step = Step::new("press 1 - View bookings\n\tpress 2 - Add a booking\n\tpress 3 - Edit bookings\n\t")
            .indent("\t")
            .hint(NavHint::Back);
        self.step(&step, |session, input| match input {
            "1" => Ok(session.view_bookings_menu()?.stay_unless_home()),
            "2" => match session.find_customer()? {
                Navigation::Value(customer) => {
                    Ok(session.new_booking(user, &customer)?.stay_unless_home())
                }
                other => Ok(other.stay_unless_home()),
            },
            "3" => Ok(session.edit_bookings()?.stay_unless_home()),
            _ => Ok(StepOutcome::Invalid),
        })
    }

    /// Pick a period and list its active bookings.
    pub fn view_bookings_menu(&mut self) -> SessionResult<Navigation<()>> {
        let step = Step::new(
            "press 1 - Today\n\t\tpress 2 - Tomorrow\n\t\tpress 3 - Next 7 days\n\t\tpress 4 - All\n\t\t",
        )
        .indent("\t\t")
        .hint(NavHint::BackAndHome);
        self.step(&step, |session, input| {
            let Some(period) = Period::from_choice(input) else {
                return Ok(StepOutcome::Invalid);
            };
            let bookings = session.active_bookings()?;
            session.print_bookings(&bookings, period)?;
            Ok(StepOutcome::Value(()))
        })
    }

    /// Whether `name` already holds an active booking on `date`; if so the
    /// clash is printed.
    pub fn has_duplicates(&mut self, date: &BookingDate, name: &str) -> SessionResult<bool> {
        let bookings = self.customer_bookings(name)?;
        let day = date.as_date();
        if !bookings.iter().any(|booking| booking.day() == Some(day)) {
            return Ok(false);
        }
        self.print(&format!("\n\t\t!!!Booking for {} already exists!!!", date))?;
        self.print_bookings(&bookings, Period::Day(day))?;
        Ok(true)
    }

    /// A booking date for `customer`: valid, not past, and not clashing with
    /// the customer's other bookings. The day's bookings are shown once a
    /// date is accepted.
    pub fn new_date(&mut self, customer: &Customer) -> SessionResult<Navigation<BookingDate>> {
        let step = Step::new("Enter a booking date (dd-mm-yyyy): ")
            .indent("\t")
            .warning("Invalid date.");
        self.step(&step, |session, input| {
            let Ok(date) = BookingDate::parse_on(input, session.today) else {
                return Ok(StepOutcome::Invalid);
            };
            if session.has_duplicates(&date, &customer.name)? {
                return Ok(StepOutcome::Stay);
            }
            let bookings = session.active_bookings()?;
            session.print_bookings(&bookings, Period::Day(date.as_date()))?;
            Ok(StepOutcome::Value(date))
        })
    }

    pub fn new_time(&mut self) -> SessionResult<Navigation<BookingTime>> {
        let step = Step::new("New time (hh:mm): ")
            .indent("\t\t")
            .warning("Invalid time.");
        self.step(&step, |_, input| Ok(BookingTime::parse(input).ok().into()))
    }

    /// Party size, at least one.
    pub fn num_of_people(&mut self) -> SessionResult<Navigation<u32>> {
        let step = Step::new("How many people: ")
            .indent("\t")
            .warning("Not a number. Please, use a number.");
        self.step(&step, |_, input| {
            Ok(input
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|people| *people >= 1)
                .into())
        })
    }

    /// Take a booking for `customer` and count it on the customer's record.
    pub fn new_booking(
        &mut self,
        user: &Staff,
        customer: &Customer,
    ) -> SessionResult<Navigation<()>> {
        let date = step_value!(self.new_date(customer)?);
        let time = step_value!(self.new_time()?);
        let people = step_value!(self.num_of_people()?);

        let booking = Booking::new(date, time, customer.name.as_str(), people, user.name.as_str());
        if !self.append(Sheet::Bookings, &booking.to_record())? {
            return Ok(Navigation::Value(()));
        }
        info!("Booked {} for {} at {}", booking.name, booking.date, booking.time);

        // Re-read so the counter is not based on a stale copy.
        if let Some(current) = self.customer_named(&customer.name)? {
            let count = (current.bookings + 1).to_string();
            self.update(Sheet::Customers, &current.key(), Customer::BOOKINGS, &count)?;
        }
        self.print_bookings(std::slice::from_ref(&booking), Period::Day(date.as_date()))?;
        Ok(Navigation::Value(()))
    }

    /// Edit menu: confirm today's bookings, reschedule or cancel one.
    pub fn edit_bookings(&mut self) -> SessionResult<Navigation<()>> {
        let step = Step::new("press 1 - Confirm\n\t\tpress 2 - Reschedule\n\t\tpress 3 - Cancel\n\t\t")
            .indent("\t\t")
            .hint(NavHint::BackAndHome);
        self.step(&step, |session, input| match input {
            "1" => {
                let today = session.today;
                let to_confirm: Vec<Booking> = session
                    .active_bookings()?
                    .into_iter()
                    .filter(|booking| !booking.is_confirmed() && booking.day() == Some(today))
                    .collect();
                if to_confirm.is_empty() {
                    session.print("\n\t\tAll bookings are confirmed! Chill!")?;
                    return Ok(StepOutcome::Stay);
                }
                Ok(session.confirm(to_confirm)?.stay_unless_home())
            }
            "2" | "3" => {
                let booking = match session.find_bookings()? {
                    Navigation::Value(booking) => booking,
                    other => return Ok(other.stay_unless_home()),
                };
                if input == "2" {
                    Ok(session.reschedule(&booking)?.stay_unless_home())
                } else {
                    session.cancel(&booking)?;
                    Ok(StepOutcome::Stay)
                }
            }
            _ => Ok(StepOutcome::Invalid),
        })
    }

    /// Walk through unconfirmed bookings one by one: confirm, skip or cancel.
    pub fn confirm(&mut self, bookings: Vec<Booking>) -> SessionResult<Navigation<()>> {
        for booking in bookings {
            self.print_bookings(std::slice::from_ref(&booking), Period::Today)?;
            let step = Step::new("press 1 - Confirmed\n\t\t\tpress 2 - Skip\n\t\t\tpress 3 - Cancel\n\t\t\t")
                .indent("\t\t\t")
                .hint(NavHint::BackAndHome);
            step_value!(self.step(&step, |session, input| match input {
                "1" => {
                    session.update(Sheet::Bookings, &booking.key(), Booking::CONF, "yes")?;
                    Ok(StepOutcome::Value(()))
                }
                "2" => Ok(StepOutcome::Value(())),
                "3" => {
                    session.cancel(&booking)?;
                    Ok(StepOutcome::Value(()))
                }
                _ => Ok(StepOutcome::Invalid),
            })?);
        }
        Ok(Navigation::Value(()))
    }

    /// A new date for `booking`; empty input keeps the current one.
    pub fn update_date(&mut self, booking: &Booking) -> SessionResult<Navigation<String>> {
        let step = Step::new("Enter a new date(dd-/.mm-/.yyyy) (leave empty if no change): ")
            .indent("\t\t")
            .warning("Invalid date.");
        self.step(&step, |session, input| {
            if input.is_empty() {
                return Ok(StepOutcome::Value(booking.date.clone()));
            }
            let Ok(date) = BookingDate::parse_on(input, session.today) else {
                return Ok(StepOutcome::Invalid);
            };
            let date_text = date.to_string();
            if date_text == booking.date {
                return Ok(StepOutcome::Value(date_text));
            }
            if session.has_duplicates(&date, &booking.name)? {
                return Ok(StepOutcome::Stay);
            }
            Ok(StepOutcome::Value(date_text))
        })
    }

    /// Move a booking to a new date and time.
    pub fn reschedule(&mut self, booking: &Booking) -> SessionResult<Navigation<()>> {
        let date = step_value!(self.update_date(booking)?);
        if let Some(day) = parse_date(date.as_str()) {
            let bookings = self.active_bookings()?;
            self.print_bookings(&bookings, Period::Day(day))?;
        }
        let time = step_value!(self.new_time()?);

        // The row is found by name and date, so the date goes last.
        let key = booking.key();
        self.update(Sheet::Bookings, &key, Booking::TIME, &time.to_string())?;
        if date != booking.date {
            self.update(Sheet::Bookings, &key, Booking::DATE, &date)?;
        }
        info!(
            "Rescheduled {} from {} {} to {} {}",
            booking.name, booking.date, booking.time, date, time
        );
        Ok(Navigation::Value(()))
    }

    /// Choose one active booking of a customer, asked for by name.
    pub fn find_bookings(&mut self) -> SessionResult<Navigation<Booking>> {
        let names: Vec<String> = self.customers()?.into_iter().map(|c| c.name).collect();

        let step = Step::new("Enter a customer's name: ")
            .indent("\t\t")
            .hint(NavHint::BackAndHome)
            .warning("Computer says no. Customer does not exist.");
        self.step(&step, |session, input| {
            if !names.iter().any(|name| name == input) {
                session.suggest_names("\t\t", input, &names)?;
                return Ok(StepOutcome::Invalid);
            }
            let bookings = session.customer_bookings(input)?;
            session.print_bookings(&bookings, Period::All)?;
            if bookings.is_empty() {
                session.print("\t\tThere are no active bookings for this customer.")?;
                return Ok(StepOutcome::Stay);
            }
            Ok(session.pick_booking(&bookings)?.into_outcome())
        })
    }

    /// One of `bookings`, chosen by its date.
    pub fn pick_booking(&mut self, bookings: &[Booking]) -> SessionResult<Navigation<Booking>> {
        let step = Step::new("Date of a booking to edit (dd-mm-yyyy): ")
            .indent("\t\t")
            .warning("There are no bookings for this date.");
        self.step(&step, |session, input| {
            let Some(day) = parse_date(input) else {
                session.print(&format!(
                    "\t\tInvalid input: '{}'. Please, enter a correct date.",
                    input
                ))?;
                return Ok(StepOutcome::Stay);
            };
            Ok(bookings
                .iter()
                .find(|booking| booking.day() == Some(day))
                .cloned()
                .into())
        })
    }

    /// Mark a booking cancelled and count it on the customer's record.
    pub fn cancel(&mut self, booking: &Booking) -> SessionResult<()> {
        self.update(Sheet::Bookings, &booking.key(), Booking::CANC, "yes")?;
        info!("Cancelled booking of {} on {}", booking.name, booking.date);

        if let Some(customer) = self.customer_named(&booking.name)? {
            let count = (customer.cancelled + 1).to_string();
            self.update(Sheet::Customers, &customer.key(), Customer::CANCELLED, &count)?;
        }
        Ok(())
    }
}
