//! Whole-list command handlers

use crate::args::ListArgs;
use crate::context::AmityCliContext;
use crate::output::*;
use crate::utils::in_value_range;
use serde_json::json;

pub async fn handle_list(
    ctx: &AmityCliContext,
    args: &ListArgs,
    output_format: &str,
) -> amity::Result<()> {
    let store = ctx.friends.store();
    let mut persons = match args.association {
        Some(association) => store.by_association(association).await,
        None => store.query(|_| true).await,
    };
    persons.retain(|p| in_value_range(p, args));
    persons.sort_by(|a, b| b.value().total_cmp(&a.value()).then_with(|| a.name.cmp(&b.name)));

    if output_format == "json" {
        println!("{}", to_json(&persons));
    } else {
        print_bounds(&store.bounds().await);
        print_person_list(&persons);
    }
    Ok(())
}

pub async fn handle_halve(ctx: &AmityCliContext, output_format: &str) -> amity::Result<()> {
    ctx.friends.store().halve_all().await?;
    ctx.save().await?;

    let count = ctx.friends.store().len().await;
    if output_format == "json" {
        println!("{}", to_json(&json!({ "halved": count })));
    } else {
        println!(
            "{}",
            format_success(&format!("Halved {} value(s).", count))
        );
    }
    Ok(())
}

/// Verify the bounds invariant; a violation is reported as an error
pub async fn handle_check(ctx: &AmityCliContext, output_format: &str) -> amity::Result<()> {
    let store = ctx.friends.store();
    store.verify_invariant().await?;

    let bounds = store.bounds().await;
    let count = store.len().await;
    if output_format == "json" {
        println!(
            "{}",
            to_json(&json!({
                "ok": true,
                "persons": count,
                "bounds": bounds,
            }))
        );
    } else {
        print_bounds(&bounds);
        println!(
            "{}",
            format_success(&format!("All {} value(s) are within bounds.", count))
        );
    }
    Ok(())
}
