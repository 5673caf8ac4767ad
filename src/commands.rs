//! User command parsing and handlers.
//!
//! Each handler takes the parsed arguments and an explicitly passed
//! [`AddressBook`], and returns the reply text or a [`CommandError`]
//! whose display string becomes the reply. The REPL owns the mapping
//! from error to printed message; handlers never print.

use crate::book::AddressBook;
use crate::domain::{Birthday, PhoneNumber, ValidationError};
use crate::error::{CommandError, CommandResult};
use crate::models::Contact;
use crate::services::upcoming_birthdays;
use chrono::NaiveDate;

/// Split a raw input line into a lowercased command and its arguments.
pub fn parse_input(line: &str) -> (String, Vec<String>) {
    let mut parts = line.split_whitespace();
    let command = parts.next().unwrap_or("").to_lowercase();
    let args = parts.map(str::to_string).collect();
    (command, args)
}

/// `add [name] [phone]` — create a contact or append a phone to an
/// existing one.
pub fn add_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let [name, phone] = args else {
        return Err(CommandError::Usage("Use format 'add [name] [phone]'"));
    };

    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName.into());
    }

    let phone = PhoneNumber::new(phone.as_str())?;

    match book.find_mut(name) {
        Some(contact) => {
            contact.add_phone(phone);
            Ok("Contact updated".to_string())
        }
        None => {
            let mut contact = Contact::new(name.as_str());
            contact.add_phone(phone);
            book.add(contact);
            Ok("Contact added".to_string())
        }
    }
}

/// `change [name] [old phone] [new phone]` — replace one of a contact's
/// phone numbers.
pub fn change_phone(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let [name, old_phone, new_phone] = args else {
        return Err(CommandError::Usage(
            "Use format 'change [name] [old phone] [new phone]'",
        ));
    };

    let new_phone = PhoneNumber::new(new_phone.as_str())?;

    let contact = book
        .find_mut(name)
        .ok_or_else(|| CommandError::UnknownContact(name.clone()))?;

    if !contact.edit_phone(old_phone, new_phone) {
        return Err(CommandError::UnknownPhone {
            name: name.clone(),
            phone: old_phone.clone(),
        });
    }

    Ok("Contact updated".to_string())
}

/// `phone [name]` — show one contact.
pub fn show_phone(args: &[String], book: &AddressBook) -> CommandResult<String> {
    let [name] = args else {
        return Err(CommandError::Usage("Use format 'phone [name]'"));
    };

    let contact = book
        .find(name)
        .ok_or_else(|| CommandError::UnknownContact(name.clone()))?;

    Ok(contact.to_string())
}

/// `all` — list every contact, one per line, in insertion order.
pub fn show_all(book: &AddressBook) -> CommandResult<String> {
    Ok(book.to_string())
}

/// `add-birthday [name] [DD.MM.YYYY]` — record a contact's birthday.
pub fn add_birthday(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let [name, birthday] = args else {
        return Err(CommandError::Usage(
            "Use format 'add-birthday [name] [birthday]'",
        ));
    };

    let birthday = Birthday::new(birthday)?;

    let contact = book
        .find_mut(name)
        .ok_or_else(|| CommandError::UnknownContact(name.clone()))?;

    contact.set_birthday(birthday);
    Ok("Birthday added".to_string())
}

/// `show-birthday [name]` — show a contact's recorded birthday.
pub fn show_birthday(args: &[String], book: &AddressBook) -> CommandResult<String> {
    let [name] = args else {
        return Err(CommandError::Usage("Use format 'show-birthday [name]'"));
    };

    let contact = book
        .find(name)
        .ok_or_else(|| CommandError::UnknownContact(name.clone()))?;

    match &contact.birthday {
        Some(birthday) => Ok(birthday.to_string()),
        None => Err(CommandError::NoBirthday(name.clone())),
    }
}

/// `birthdays` — report birthdays within the lookahead window, one
/// `name: DD.MM.YYYY` line per contact, in the book's insertion order.
pub fn birthdays(book: &AddressBook, days: i64, today: NaiveDate) -> CommandResult<String> {
    let lines: Vec<String> = upcoming_birthdays(book.iter(), days, today)
        .iter()
        .map(ToString::to_string)
        .collect();
    Ok(lines.join("\n"))
}
