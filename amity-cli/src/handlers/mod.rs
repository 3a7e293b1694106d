//! Command handlers for the Amity CLI

pub mod friend;
pub mod list;

use crate::commands::Commands;
use crate::context::AmityCliContext;
use amity::relationships::{Association, NEUTRAL_VALUE};

/// Run one command against the context's friend list
pub async fn handle_command(
    cmd: Commands,
    ctx: &AmityCliContext,
    output_format: &str,
) -> amity::Result<()> {
    match cmd {
        Commands::Friend(args) => {
            friend::handle_set(ctx, &args.name, Association::Ally.value(), output_format).await
        }
        Commands::Enemy(args) => {
            friend::handle_set(ctx, &args.name, Association::Enemy.value(), output_format).await
        }
        Commands::Neutral(args) => {
            friend::handle_set(ctx, &args.name, NEUTRAL_VALUE, output_format).await
        }
        Commands::Set(args) => friend::handle_set(ctx, &args.name, args.value, output_format).await,
        Commands::Get(args) => friend::handle_get(ctx, &args.name, output_format).await,
        Commands::Remove(args) => friend::handle_remove(ctx, &args.name, output_format).await,
        Commands::List(args) => list::handle_list(ctx, &args, output_format).await,
        Commands::Halve => list::handle_halve(ctx, output_format).await,
        Commands::Check => list::handle_check(ctx, output_format).await,
    }
}
