//! Command enum definitions

use crate::args::*;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Mark a player as a friend
    #[command(alias = "ally")]
    Friend(NameArgs),

    /// Mark a player as an enemy
    #[command(alias = "foe")]
    Enemy(NameArgs),

    /// Reset a player to neutral
    Neutral(NameArgs),

    /// Set a player's friendliness value
    #[command(
        long_about = r#"
Set a player's friendliness value.

Values must stay within the list's bounds (default -2 to 2). A value beyond a
bound does not get clamped: the player is pinned to the bound and every other
value on the list is scaled down by the same factor, so who you like more than
whom is preserved.

EXAMPLE:
  With Steve at 1 and Alex at -2, `amity-cli set Notch 4` scales everything by
  0.5: Steve 0.5, Alex -1, Notch 2.
"#
    )]
    Set(SetValueArgs),

    /// Show how a player is regarded
    Get(NameArgs),

    /// Forget a player
    #[command(alias = "forget")]
    Remove(NameArgs),

    /// List players with optional filters
    List(ListArgs),

    /// Halve every value on the list
    Halve,

    /// Verify every value lies within the bounds
    Check,
}
