//! Parses comma-separated value lists used on the command line.

use crate::types::{WalkError, WalkResult};

/// Parse a level-order tree listing such as `4,2,7,null,3`.
///
/// `null`, `none`, `_` and `#` mark a missing child. Whitespace around items
/// is ignored; an empty string is an empty tree.
pub fn parse_level_order(text: &str) -> WalkResult<Vec<Option<i32>>> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    text.split(',')
        .map(|item| {
            let item = item.trim();
            match item.to_lowercase().as_str() {
                "null" | "none" | "_" | "#" => Ok(None),
                _ => item
                    .parse::<i32>()
                    .map(Some)
                    .map_err(|_| WalkError::InvalidTree(format!("bad node value {:?}", item))),
            }
        })
        .collect()
}

/// Parse a comma-separated list of integers such as `1, 2, 3`.
pub fn parse_values(text: &str) -> WalkResult<Vec<i32>> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<i32>()
                .map_err(|_| WalkError::InvalidArgument(format!("bad integer {:?}", s)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gaps_parse_as_none() {
        assert_eq!(
            parse_level_order("4, 2,null,_ ,3").unwrap(),
            vec![Some(4), Some(2), None, None, Some(3)]
        );
    }

    #[test]
    fn bad_value_is_rejected() {
        assert!(matches!(
            parse_level_order("4,x"),
            Err(WalkError::InvalidTree(_))
        ));
        assert!(matches!(
            parse_values("1,,2,y"),
            Err(WalkError::InvalidArgument(_))
        ));
    }
}
