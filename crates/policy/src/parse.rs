//! Textual form of overwriting policies.
//!
//! ```text
//! policy    := policy ';' policy            chain
//!            | '{' criterion '}' '[' policy ']' [policy]
//!            | DATA ATTR                    two-letter constant
//! criterion := criterion '|' criterion
//!            | criterion '&' criterion
//!            | '(' criterion ')' | '!' criterion | '~' criterion
//!            | 'R(' date ')' | 'r(' date ')' | ATOM
//! ```
//!
//! `DATA` is one of `P O S T R * A`, `ATTR` one of `p o s t m n r * a`, and
//! `ATOM` one of `I D F H A R B S Y X L e r m b s T`. A conditional without
//! an else part leaves both axes undefined when its criterion is false.

use std::str::FromStr;

use infinint::BigUint;
use time::{Date, Month, PrimitiveDateTime, Time};

use crate::action::{AttrAction, DataAction, Outcome};
use crate::criterion::Criterion;
use crate::debug_policy::trace_policy_parsed;
use crate::error::PolicyParseError;
use crate::policy::{Action, ChainBuilder};

/// Parses a textual overwriting policy.
///
/// `hourshift` is handed to every date comparison in the policy.
///
/// # Examples
///
/// ```
/// use catalogue::{EntryDescriptor, EntryVariant};
/// use policy::{AttrAction, DataAction, Resolution, parse_policy};
///
/// // Overwrite data when the in-place copy is older, always merge attributes.
/// let policy = parse_policy("{R}[P*]O*;*m", 0)?;
///
/// let old = EntryDescriptor::new("f", EntryVariant::PlainFile).with_mtime(10);
/// let new = EntryDescriptor::new("f", EntryVariant::PlainFile).with_mtime(20);
/// assert_eq!(
///     policy.resolve(&old, &new),
///     Resolution::new(DataAction::Overwrite, AttrAction::MergePreserve),
/// );
/// # Ok::<(), policy::PolicyParseError>(())
/// ```
pub fn parse_policy(text: &str, hourshift: u64) -> Result<Action, PolicyParseError> {
    let text = text.trim();
    let action = parse_action(text, hourshift)?;
    trace_policy_parsed(text, hourshift);
    Ok(action)
}

/// Parses a criterion expression on its own.
pub fn parse_criterion(text: &str, hourshift: u64) -> Result<Criterion, PolicyParseError> {
    parse_crit(text.trim(), hourshift)
}

/// Converts a date argument to seconds since the epoch.
///
/// Accepts a decimal number of seconds or a UTC calendar date written
/// `YYYY/MM/DD`, `YYYY/MM/DD-hh:mm` or `YYYY/MM/DD-hh:mm:ss`.
///
/// # Examples
///
/// ```
/// use policy::parse_date;
///
/// assert_eq!(parse_date("86400")?, 86_400);
/// assert_eq!(parse_date("1970/01/02-00:00:00")?, 86_400);
/// assert!(parse_date("1969/12/31").is_err());
/// # Ok::<(), policy::PolicyParseError>(())
/// ```
pub fn parse_date(argument: &str) -> Result<u64, PolicyParseError> {
    if is_digits(argument) {
        let seconds = BigUint::from_str(argument)
            .map_err(|_| invalid_date(argument, "not a decimal number"))?;
        return seconds
            .to_u64()
            .ok_or_else(|| invalid_date(argument, "date out of range"));
    }
    parse_calendar_date(argument)
}

fn parse_action(text: &str, hourshift: u64) -> Result<Action, PolicyParseError> {
    if text.is_empty() {
        return Err(PolicyParseError::Empty {
            context: "overwriting policy",
        });
    }

    if let Some(split) = find_top_level(text, ';')? {
        let mut chain = ChainBuilder::new();
        chain.add(parse_action(&text[..split], hourshift)?);
        chain.gobe(parse_action(&text[split + 1..], hourshift)?);
        return Ok(chain.build());
    }

    if text.starts_with('{') {
        return parse_conditional(text, hourshift);
    }

    let mut letters = text.chars();
    if let (Some(data), Some(attrs), None) = (letters.next(), letters.next(), letters.next()) {
        if let (Some(data), Some(attrs)) =
            (DataAction::from_letter(data), AttrAction::from_letter(attrs))
        {
            return Ok(Action::Constant(Outcome { data, attrs }));
        }
    }

    Err(PolicyParseError::UnknownAction {
        expression: text.to_owned(),
    })
}

fn parse_conditional(text: &str, hourshift: u64) -> Result<Action, PolicyParseError> {
    let close = matching_close(text)?
        .filter(|&index| text[index..].starts_with('}'))
        .ok_or_else(|| malformed("missing }", text))?;
    let rest = &text[close + 1..];
    if !rest.starts_with('[') {
        return Err(malformed("missing [ after }", text));
    }
    let end = matching_close(rest)?
        .filter(|&index| rest[index..].starts_with(']'))
        .ok_or_else(|| malformed("missing ]", text))?;

    let criterion = parse_crit(&text[1..close], hourshift)?;
    let go_true = parse_action(&rest[1..end], hourshift)?;
    let tail = &rest[end + 1..];
    let go_false = if tail.is_empty() {
        Action::undefined()
    } else {
        parse_action(tail, hourshift)?
    };
    Ok(Action::conditional(criterion, go_true, go_false))
}

fn parse_crit(text: &str, hourshift: u64) -> Result<Criterion, PolicyParseError> {
    if text.is_empty() {
        return Err(PolicyParseError::Empty {
            context: "criterion",
        });
    }

    if let Some(split) = find_top_level(text, '|')? {
        let mut children = vec![parse_crit(&text[..split], hourshift)?];
        match parse_crit(&text[split + 1..], hourshift)? {
            Criterion::Or(more) => children.extend(more),
            other => children.push(other),
        }
        return Ok(Criterion::Or(children));
    }

    if let Some(split) = find_top_level(text, '&')? {
        let mut children = vec![parse_crit(&text[..split], hourshift)?];
        match parse_crit(&text[split + 1..], hourshift)? {
            Criterion::And(more) => children.extend(more),
            other => children.push(other),
        }
        return Ok(Criterion::And(children));
    }

    if let Some(inner) = text.strip_prefix('(').and_then(|t| t.strip_suffix(')')) {
        return parse_crit(inner, hourshift);
    }
    if let Some(rest) = text.strip_prefix('!') {
        return Ok(!parse_crit(rest, hourshift)?);
    }
    if let Some(rest) = text.strip_prefix('~') {
        return Ok(parse_crit(rest, hourshift)?.inverted());
    }

    if let Some(argument) = text.get(1..).and_then(|t| t.strip_prefix('(')?.strip_suffix(')')) {
        let on_data = match text.as_bytes()[0] {
            b'R' => true,
            b'r' => false,
            _ => return Err(unknown_criterion(text)),
        };
        let date = parse_date(argument)?;
        return Ok(if on_data {
            Criterion::DataMoreRecentOrEqualTo { date, hourshift }
        } else {
            Criterion::AttrsMoreRecentOrEqualTo { date, hourshift }
        });
    }

    let mut chars = text.chars();
    let (Some(atom), None) = (chars.next(), chars.next()) else {
        return Err(unknown_criterion(text));
    };
    Ok(match atom {
        'I' => Criterion::IsInode,
        'D' => Criterion::IsDirectory,
        'F' => Criterion::IsPlainFile,
        'H' => Criterion::IsHardLinked,
        'A' => Criterion::IsFirstHardLink,
        'R' => Criterion::DataMoreRecent { hourshift },
        'B' => Criterion::DataBigger,
        'S' => Criterion::DataSaved,
        'Y' => Criterion::DataDirty,
        'X' => Criterion::DataSparse,
        'L' => Criterion::HasDeltaSignature,
        'e' => Criterion::AttrsPresent,
        'r' => Criterion::AttrsMoreRecent { hourshift },
        'm' => Criterion::MoreAttrs,
        'b' => Criterion::AttrsBigger,
        's' => Criterion::AttrsSaved,
        'T' => Criterion::SameType,
        _ => return Err(unknown_criterion(text)),
    })
}

/// Byte offset of the first `target` outside any parenthesis, brace or
/// bracket.
fn find_top_level(text: &str, target: char) -> Result<Option<usize>, PolicyParseError> {
    let mut depth = 0usize;
    for (index, c) in text.char_indices() {
        if c == target && depth == 0 {
            return Ok(Some(index));
        }
        match c {
            '(' | '{' | '[' => depth += 1,
            ')' | '}' | ']' => {
                depth = depth.checked_sub(1).ok_or_else(|| unbalanced(text))?;
            }
            _ => {}
        }
    }
    Ok(None)
}

/// Byte offset of the closer that returns to depth zero, counting from the
/// opener at offset 0.
fn matching_close(text: &str) -> Result<Option<usize>, PolicyParseError> {
    let mut depth = 0usize;
    for (index, c) in text.char_indices() {
        match c {
            '(' | '{' | '[' => depth += 1,
            ')' | '}' | ']' => {
                depth = depth.checked_sub(1).ok_or_else(|| unbalanced(text))?;
                if depth == 0 {
                    return Ok(Some(index));
                }
            }
            _ => {}
        }
    }
    Ok(None)
}

fn parse_calendar_date(argument: &str) -> Result<u64, PolicyParseError> {
    let (day_part, time_part) = match argument.split_once('-') {
        Some((day, time)) => (day, Some(time)),
        None => (argument, None),
    };

    let fields: Vec<&str> = day_part.split('/').collect();
    let [year, month, day] = fields.as_slice() else {
        return Err(invalid_date(argument, "bad formatted date expression"));
    };
    let year: u16 = number(year, argument)?;
    if year < 1970 {
        return Err(invalid_date(argument, "date before 1970 is not allowed"));
    }
    let month = Month::try_from(number::<u8>(month, argument)?)
        .map_err(|_| invalid_date(argument, "incorrect month"))?;
    let date = Date::from_calendar_date(i32::from(year), month, number(day, argument)?)
        .map_err(|_| invalid_date(argument, "incorrect day of month"))?;

    let time = match time_part {
        None => Time::MIDNIGHT,
        Some(text) => {
            let fields: Vec<&str> = text.split(':').collect();
            let (hour, minute, second) = match fields.as_slice() {
                [hour, minute] => (*hour, *minute, "0"),
                [hour, minute, second] => (*hour, *minute, *second),
                _ => return Err(invalid_date(argument, "bad formatted date expression")),
            };
            Time::from_hms(
                number(hour, argument)?,
                number(minute, argument)?,
                number(second, argument)?,
            )
            .map_err(|_| invalid_date(argument, "incorrect time of day"))?
        }
    };

    let timestamp = PrimitiveDateTime::new(date, time).assume_utc().unix_timestamp();
    u64::try_from(timestamp).map_err(|_| invalid_date(argument, "date out of range"))
}

fn number<T: FromStr>(field: &str, argument: &str) -> Result<T, PolicyParseError> {
    if !is_digits(field) {
        return Err(invalid_date(argument, "bad formatted date expression"));
    }
    field
        .parse()
        .map_err(|_| invalid_date(argument, "bad formatted date expression"))
}

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|byte| byte.is_ascii_digit())
}

fn invalid_date(argument: &str, reason: &'static str) -> PolicyParseError {
    PolicyParseError::InvalidDate {
        argument: argument.to_owned(),
        reason,
    }
}

fn unbalanced(text: &str) -> PolicyParseError {
    PolicyParseError::Unbalanced {
        expression: text.to_owned(),
    }
}

fn malformed(reason: &'static str, text: &str) -> PolicyParseError {
    PolicyParseError::MalformedConditional {
        reason,
        expression: text.to_owned(),
    }
}

fn unknown_criterion(text: &str) -> PolicyParseError {
    PolicyParseError::UnknownCriterion {
        expression: text.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_level_search_skips_nested_groups() {
        assert_eq!(find_top_level("{A;B}[x];y", ';'), Ok(Some(8)));
        assert_eq!(find_top_level("(a|b)", '|'), Ok(None));
        assert!(find_top_level("a)|b", '|').is_err());
    }

    #[test]
    fn matching_close_finds_partner() {
        assert_eq!(matching_close("{(R)}[Pp]"), Ok(Some(4)));
        assert_eq!(matching_close("[a[b]c]d"), Ok(Some(6)));
        assert_eq!(matching_close("{R"), Ok(None));
    }

    #[test]
    fn constants_parse_both_letters() {
        let action = parse_action("O*", 0).expect("valid");
        assert!(matches!(
            action,
            Action::Constant(Outcome {
                data: Some(DataAction::Overwrite),
                attrs: None
            })
        ));
        assert!(parse_action("Op?", 0).is_err());
        assert!(parse_action("pO", 0).is_err());
    }

    #[test]
    fn chains_are_flattened() {
        let Action::Chain(members) = parse_action("Pp;Oo;Rr", 0).expect("valid") else {
            panic!("expected chain");
        };
        assert_eq!(members.len(), 3);
    }

    #[test]
    fn criteria_operators_are_flattened() {
        let Criterion::Or(children) = parse_crit("I|D|F", 0).expect("valid") else {
            panic!("expected or");
        };
        assert_eq!(children.len(), 3);
        let Criterion::And(children) = parse_crit("I&(D|F)&!T", 0).expect("valid") else {
            panic!("expected and");
        };
        assert_eq!(children.len(), 3);
        assert!(matches!(children[1], Criterion::Or(_)));
        assert!(matches!(children[2], Criterion::Not(_)));
    }

    #[test]
    fn or_binds_looser_than_and() {
        let Criterion::Or(children) = parse_crit("I&D|F", 0).expect("valid") else {
            panic!("expected or at top level");
        };
        assert!(matches!(children[0], Criterion::And(_)));
        assert!(matches!(children[1], Criterion::IsPlainFile));
    }

    #[test]
    fn hourshift_is_threaded_into_date_criteria() {
        assert!(matches!(
            parse_crit("R", 2),
            Ok(Criterion::DataMoreRecent { hourshift: 2 })
        ));
        assert!(matches!(
            parse_crit("r(100)", 3),
            Ok(Criterion::AttrsMoreRecentOrEqualTo {
                date: 100,
                hourshift: 3
            })
        ));
    }

    #[test]
    fn calendar_dates() {
        assert_eq!(parse_date("1970/01/01"), Ok(0));
        assert_eq!(parse_date("2023/11/14-22:13:20"), Ok(1_700_000_000));
        assert_eq!(parse_date("2023/11/14-22:13"), Ok(1_699_999_980));
        assert!(matches!(
            parse_date("2023/13/01"),
            Err(PolicyParseError::InvalidDate {
                reason: "incorrect month",
                ..
            })
        ));
        assert!(parse_date("2023/02/30").is_err());
        assert!(parse_date("2023/01/01-24:00:00").is_err());
        assert!(parse_date("2023-01-01").is_err());
        assert!(parse_date("+5").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn huge_second_counts_are_rejected() {
        assert!(matches!(
            parse_date("99999999999999999999999"),
            Err(PolicyParseError::InvalidDate {
                reason: "date out of range",
                ..
            })
        ));
    }
}
