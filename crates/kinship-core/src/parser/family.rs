//! `FAM` record sub-parser

use super::pointer;
use crate::error::Result;
use crate::family::{Family, SpouseRef, SpouseRole};
use crate::reader::LineCursor;
use std::io::BufRead;

/// Consume the lines of one family record into `family`.
///
/// Expects the cursor on the record's level-0 line and leaves it on the next
/// level-0 line or at end of input.
pub(crate) fn parse_family<R: BufRead>(
    cursor: &mut LineCursor<R>,
    family: &mut Family,
) -> Result<()> {
    cursor.advance()?;

    while let Some(line) = cursor.current() {
        if line.is_record_start() {
            break;
        }

        match line.tag() {
            Some("CHIL") => family.add_child(pointer(line)?),
            Some(tag) => {
                if let Some(role) = SpouseRole::from_tag(tag) {
                    let spouse = SpouseRef::new(pointer(line)?, role);
                    if let Some(displaced) = family.add_spouse(spouse) {
                        tracing::warn!(
                            "Family {} has more than two spouses; {} replaced by line {}",
                            family.id,
                            displaced.person_id,
                            line.number
                        );
                    }
                }
            }
            None => {}
        }
        cursor.advance()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse(input: &str) -> Family {
        let mut cursor = LineCursor::new(Cursor::new(input.as_bytes())).unwrap();
        let mut family = Family::new("F1");
        parse_family(&mut cursor, &mut family).unwrap();
        family
    }

    #[test]
    fn test_spouses_and_children() {
        let family = parse(
            "0 @F1@ FAM\n1 HUSB @I1@\n1 WIFE @I2@\n1 MARR\n2 DATE 1940\n1 CHIL @I4@\n1 CHIL @I3@\n0 TRLR\n",
        );
        let husband = family.spouse1.unwrap();
        assert_eq!(husband.person_id, "I1");
        assert_eq!(husband.role, SpouseRole::Husband);
        assert_eq!(family.spouse2.unwrap().person_id, "I2");
        assert_eq!(family.children, vec!["I4", "I3"]);
    }

    #[test]
    fn test_slot_follows_arrival_not_role() {
        let family = parse("0 @F1@ FAM\n1 WIFE @I2@\n1 HUSB @I1@\n");
        let first = family.spouse1.as_ref().unwrap();
        assert_eq!(first.person_id, "I2");
        assert_eq!(first.role, SpouseRole::Wife);
        assert_eq!(family.husband().unwrap().person_id, "I1");
    }

    #[test]
    fn test_single_parent() {
        let family = parse("0 @F1@ FAM\n1 WIFE @I2@\n1 CHIL @I3@\n");
        assert!(family.spouse2.is_none());
        assert_eq!(family.spouses().count(), 1);
    }

    #[test]
    fn test_bad_child_pointer() {
        let mut cursor =
            LineCursor::new(Cursor::new("0 @F1@ FAM\n1 HUSB @I1@\n1 CHIL\n".as_bytes())).unwrap();
        let mut family = Family::new("F1");
        let err = parse_family(&mut cursor, &mut family).unwrap_err();
        assert!(err.is_structural());
        assert_eq!(family.spouse1.unwrap().person_id, "I1");
    }
}
