//! Single-player command handlers

use crate::context::AmityCliContext;
use crate::output::*;
use colored::Colorize;
use serde_json::json;

/// Set a player's value and save the list
pub async fn handle_set(
    ctx: &AmityCliContext,
    name: &str,
    value: f64,
    output_format: &str,
) -> amity::Result<()> {
    let multiplier = ctx.friends.set_value_by_name(name, value).await?;
    ctx.save().await?;

    let person = ctx.friends.get_by_name(name).await?;
    if output_format == "json" {
        println!(
            "{}",
            to_json(&json!({
                "person": person,
                "rescaled": multiplier.is_some(),
                "multiplier": multiplier,
            }))
        );
        return Ok(());
    }

    if let Some(warning) = format_rescale(multiplier) {
        println!("{}", warning);
    }
    let stored = person.map(|p| p.value()).unwrap_or(value);
    println!(
        "{}",
        format_success(&format!(
            "{} is now at {}",
            name.color(CliColors::accent()),
            format_value(stored)
        ))
    );
    Ok(())
}

pub async fn handle_get(ctx: &AmityCliContext, name: &str, output_format: &str) -> amity::Result<()> {
    let person = ctx.friends.get_by_name(name).await?;

    if output_format == "json" {
        let value = person.as_ref().map(|p| p.value()).unwrap_or_default();
        println!(
            "{}",
            to_json(&json!({
                "name": name,
                "known": person.is_some(),
                "value": value,
                "person": person,
            }))
        );
        return Ok(());
    }

    match person {
        Some(person) => print_person(&person),
        None => println!(
            "{}",
            format_info(&format!("No value stored for '{}'; treated as neutral.", name))
        ),
    }
    Ok(())
}

pub async fn handle_remove(
    ctx: &AmityCliContext,
    name: &str,
    output_format: &str,
) -> amity::Result<()> {
    let removed = ctx.friends.remove_by_name(name).await?;
    if removed.is_some() {
        ctx.save().await?;
    }

    if output_format == "json" {
        println!(
            "{}",
            to_json(&json!({ "name": name, "removed": removed.is_some() }))
        );
    } else if removed.is_some() {
        println!("{}", format_success(&format!("Forgot '{}'.", name)));
    } else {
        println!("{}", format_warning(&format!("'{}' was not on the list.", name)));
    }
    Ok(())
}
