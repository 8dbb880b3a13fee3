//! Name resolution: at most one alias substitution, then a lookup in things.

use crate::config::{AliasTable, ThingTable};
use crate::error::{Error, Result};

/// Resolve a raw token to the URI or path it names.
///
/// If `token` is an alias it is replaced by the alias value once; the result
/// must be a literal key in `things`. An alias pointing at another alias does
/// not resolve unless that second name is also a thing. The error always
/// carries `token` as given, never the substituted name.
pub fn resolve<'a>(token: &str, aliases: &AliasTable, things: &'a ThingTable) -> Result<&'a str> {
    let key = aliases.get(token).map(String::as_str).unwrap_or(token);

    things
        .get(key)
        .map(String::as_str)
        .ok_or_else(|| Error::NotFound {
            token: token.to_string(),
        })
}
