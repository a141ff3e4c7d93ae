//! Interactive profile questionnaire.

use std::collections::HashSet;

use chrono::NaiveDate;
use profpass::{Individual, Name, Pet, Target};

use super::get_editable_input;
use crate::terminal::print_error;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DateError {
    #[error("Date must be exactly 8 digits (MMDDYYYY or DDMMYYYY).")]
    Format,

    #[error("{0} is not a valid calendar date.")]
    Invalid(String),
}

/// Operator backed out with Esc or end of input.
#[derive(Debug)]
pub struct Cancelled;

type Answer<T> = Result<T, Cancelled>;

/// Parse an 8-digit date, month first, falling back to day first.
pub fn parse_date(s: &str) -> Result<NaiveDate, DateError> {
    if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DateError::Format);
    }
    let field = |range: std::ops::Range<usize>| s[range].parse::<u32>().map_err(|_| DateError::Format);
    let (first, second) = (field(0..2)?, field(2..4)?);
    let year = field(4..8)? as i32;

    NaiveDate::from_ymd_opt(year, first, second)
        .or_else(|| NaiveDate::from_ymd_opt(year, second, first))
        .ok_or_else(|| DateError::Invalid(s.to_string()))
}

/// Strip everything but digits, drop empties and repeats.
pub fn sanitize_numbers(items: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .iter()
        .map(|raw| raw.chars().filter(char::is_ascii_digit).collect::<String>())
        .filter(|digits| !digits.is_empty() && seen.insert(digits.clone()))
        .collect()
}

/// `Some(answer)` for y/yes/n/no, `Some(default)` for blank, `None` otherwise.
pub fn parse_yes_no(answer: &str, default: bool) -> Option<bool> {
    match answer.trim().to_lowercase().as_str() {
        "" => Some(default),
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

fn ask(prompt: &str) -> Answer<String> {
    get_editable_input(prompt, "")
        .map(|s| s.trim().to_string())
        .ok_or(Cancelled)
}

fn ask_optional(prompt: &str) -> Answer<Option<String>> {
    ask(prompt).map(|s| Some(s).filter(|s| !s.is_empty()))
}

fn ask_yes_no(prompt: &str, default: bool) -> Answer<bool> {
    let hint = if default { "Y/n" } else { "y/N" };
    loop {
        let answer = ask(&format!("{prompt} [{hint}]"))?;
        match parse_yes_no(&answer, default) {
            Some(yes) => return Ok(yes),
            None => print_error("Please answer y or n."),
        }
    }
}

fn ask_list(prompt: &str) -> Answer<Vec<String>> {
    println!("{prompt} (one per line, blank to finish)");
    let mut items = Vec::new();
    loop {
        let item = ask("  -")?;
        if item.is_empty() {
            return Ok(items);
        }
        items.push(item);
    }
}

fn ask_date(prompt: &str) -> Answer<Option<NaiveDate>> {
    loop {
        let answer = ask(&format!("{prompt} (MMDDYYYY or DDMMYYYY, blank to skip)"))?;
        if answer.is_empty() {
            return Ok(None);
        }
        match parse_date(&answer) {
            Ok(date) => return Ok(Some(date)),
            Err(e) => print_error(&format!("{e} Try again or leave blank to skip.")),
        }
    }
}

fn ask_name(prompt: &str) -> Answer<Name> {
    loop {
        match Name::new(ask(prompt)?) {
            Ok(name) => return Ok(name),
            Err(_) => print_error("A name is required."),
        }
    }
}

fn collect_person(label: &str) -> Answer<Individual> {
    println!("\n{label} details:");
    Ok(Individual {
        name: ask_name("First name")?,
        family_name: ask_optional("Family name")?,
        nickname: ask_optional("Nickname")?,
        birth_date: ask_date("Birth date")?,
        id_number: ask_optional("ID number")?,
        professions: ask_list("Professions")?,
    })
}

fn collect_people(section: &str, label: &str) -> Answer<Vec<Individual>> {
    println!("\n{section}");
    let mut people = Vec::new();
    while ask_yes_no(&format!("Add a {}?", label.to_lowercase()), false)? {
        people.push(collect_person(label)?);
    }
    Ok(people)
}

fn collect_pets() -> Answer<Vec<Pet>> {
    println!("\nPets");
    let mut pets = Vec::new();
    while ask_yes_no("Add a pet?", false)? {
        println!("\nPet details:");
        pets.push(Pet {
            name: ask_name("Pet name")?,
            nickname: ask_optional("Pet nickname")?,
        });
    }
    Ok(pets)
}

fn collect_special_dates() -> Answer<Vec<NaiveDate>> {
    println!("\nSpecial dates (anniversaries, memorable days)");
    let mut dates = Vec::new();
    while ask_yes_no("Add a special date?", false)? {
        if let Some(date) = ask_date("Date")? {
            dates.push(date);
        }
    }
    Ok(dates)
}

/// Walk the operator through the whole profile.
pub fn collect_target() -> Answer<Target> {
    println!("Answer the following about the target. Esc aborts.");

    let mut target = Target::new(collect_person("Target")?);
    for parent in collect_people("Parents", "Parent")? {
        target.add_parent(parent);
    }
    for partner in collect_people("Partners", "Partner")? {
        target.add_partner(partner);
    }
    for child in collect_people("Children", "Child")? {
        target.add_child(child);
    }
    for pet in collect_pets()? {
        target.add_pet(pet);
    }

    println!();
    target.special_keywords = ask_list("Special keywords (hobbies, company, interests)")?;
    target.special_numbers = sanitize_numbers(&ask_list("Special numbers (IDs, phone fragments)")?);
    target.special_dates = collect_special_dates()?;

    tracing::debug!(relations = target.relations().count(), "profile collected");
    Ok(target)
}
