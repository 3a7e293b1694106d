use crate::args::ListArgs;
use amity::relationships::{Association, Person};

/// clap value parser for association names (ally/friend, neutral, enemy/foe)
pub fn parse_association(s: &str) -> Result<Association, String> {
    s.parse()
}

/// Whether `person` passes the value-range filters of `args`.
///
/// Association filtering is done by the store query itself.
pub fn in_value_range(person: &Person, args: &ListArgs) -> bool {
    let value = person.value();
    args.min_value.is_none_or(|min| value >= min) && args.max_value.is_none_or(|max| value <= max)
}
