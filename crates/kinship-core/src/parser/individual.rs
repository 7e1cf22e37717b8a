//! `INDI` record sub-parser

use super::pointer;
use crate::error::Result;
use crate::event::{Event, EventBuilder};
use crate::person::Person;
use crate::reader::{Line, LineCursor};
use std::io::BufRead;

/// Column where the NAME payload starts (`1 NAME Given /Surname/`)
const NAME_COLUMN: usize = 6;

/// Column where the PLAC payload starts (`2 PLAC Boston`)
const PLACE_COLUMN: usize = 7;

/// Consume the lines of one individual record into `person`.
///
/// Expects the cursor on the record's level-0 line and leaves it on the next
/// level-0 line or at end of input.
pub(crate) fn parse_individual<R: BufRead>(
    cursor: &mut LineCursor<R>,
    person: &mut Person,
) -> Result<()> {
    cursor.advance()?;

    while let Some(line) = cursor.current() {
        if line.is_record_start() {
            break;
        }
        let level = line.level.unwrap_or(1);

        match line.tag().unwrap_or_default() {
            "NAME" => {
                let (given, surname, suffix) = split_name(line);
                person.set_name(given, surname, suffix);
            }
            "FAMS" => person.add_spouse_family(pointer(line)?),
            "FAMC" => person.set_child_family(pointer(line)?),
            // the event scan stops on the first line it does not own, which is
            // classified here on the next pass without advancing
            "BIRT" => {
                person.birth = Some(parse_event(cursor, level)?);
                continue;
            }
            "DEAT" => {
                person.death = Some(parse_event(cursor, level)?);
                continue;
            }
            "MARR" => {
                person.marriage = Some(parse_event(cursor, level)?);
                continue;
            }
            _ => {}
        }
        cursor.advance()?;
    }
    Ok(())
}

/// Split `Given Names /Surname/ Suffix` into its three parts
fn split_name(line: &Line) -> (String, String, String) {
    let payload = line.from_column(NAME_COLUMN).unwrap_or_default();
    let mut parts = payload.split('/');
    let given = parts.next().unwrap_or_default().trim();
    let surname = parts.next().unwrap_or_default();
    let suffix = parts.next().unwrap_or_default().trim();
    (given.to_string(), surname.to_string(), suffix.to_string())
}

/// Read the DATE/PLAC lines nested under an event tag at `level`
fn parse_event<R: BufRead>(cursor: &mut LineCursor<R>, level: u8) -> Result<Event> {
    let mut event = EventBuilder::default();
    cursor.advance()?;

    while let Some(line) = cursor.current() {
        if !line.is_deeper_than(level) {
            break;
        }
        if line.level == Some(level + 1) {
            match line.tag() {
                Some("DATE") => event.date(line.fields().skip(2).collect::<Vec<_>>().join(" ")),
                Some("PLAC") => event.place(line.from_column(PLACE_COLUMN).unwrap_or_default().trim()),
                _ => {}
            }
        }
        cursor.advance()?;
    }
    Ok(event.build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse(input: &str) -> (Person, Option<String>) {
        let mut cursor = LineCursor::new(Cursor::new(input.as_bytes())).unwrap();
        let mut person = Person::new("I1");
        parse_individual(&mut cursor, &mut person).unwrap();
        let rest = cursor.current().map(|l| l.text.clone());
        (person, rest)
    }

    #[test]
    fn test_split_name() {
        let line = Line::new(1, "1 NAME John Fitzgerald /Kennedy/ Jr.");
        assert_eq!(
            split_name(&line),
            ("John Fitzgerald".into(), "Kennedy".into(), "Jr.".into())
        );

        let no_suffix = Line::new(1, "1 NAME Rose /Fitzgerald/");
        assert_eq!(
            split_name(&no_suffix),
            ("Rose".into(), "Fitzgerald".into(), "".into())
        );

        let bare = Line::new(1, "1 NAME Cher");
        assert_eq!(split_name(&bare), ("Cher".into(), "".into(), "".into()));
    }

    #[test]
    fn test_stops_at_next_record() {
        let (person, rest) = parse("0 @I1@ INDI\n1 NAME A /B/\n1 SEX M\n0 @I2@ INDI\n");
        assert_eq!(person.given, "A");
        assert_eq!(rest.as_deref(), Some("0 @I2@ INDI"));
    }

    #[test]
    fn test_events() {
        let input = "\
0 @I1@ INDI
1 BIRT
2 DATE  29   MAY 1917
2 PLAC    Brookline, Massachusetts  
1 DEAT
2 DATE 22 NOV 1963
1 MARR
2 PLAC Newport
1 FAMS @F1@
0 TRLR
";
        let (person, rest) = parse(input);
        let birth = person.birth.unwrap();
        assert_eq!(birth.date(), "29 MAY 1917");
        assert_eq!(birth.place(), "Brookline, Massachusetts");
        assert_eq!(person.death.unwrap().place(), "");
        assert_eq!(person.marriage.unwrap().place(), "Newport");
        assert_eq!(person.spouse_families, vec!["F1"]);
        assert_eq!(rest.as_deref(), Some("0 TRLR"));
    }

    #[test]
    fn test_event_ends_at_record_boundary() {
        let (person, rest) = parse("0 @I1@ INDI\n1 BIRT\n2 DATE 1900\n0 @I2@ INDI\n");
        assert_eq!(person.birth.unwrap().date(), "1900");
        assert_eq!(rest.as_deref(), Some("0 @I2@ INDI"));
    }

    #[test]
    fn test_event_ignores_deeper_levels() {
        let input = "\
0 @I1@ INDI
1 BIRT
2 DATE 1900
3 DATE 1999
2 SOUR @S1@
1 FAMC @F2@
";
        let (person, _) = parse(input);
        assert_eq!(person.birth.unwrap().date(), "1900");
        assert_eq!(person.child_family.as_deref(), Some("F2"));
    }

    #[test]
    fn test_family_links() {
        let input = "\
0 @I1@ INDI
1 FAMC @F1@
1 FAMS @F2@
1 FAMS @F3@
1 FAMC @F4@
";
        let (person, rest) = parse(input);
        assert_eq!(person.spouse_families, vec!["F2", "F3"]);
        assert_eq!(person.child_family.as_deref(), Some("F4"));
        assert!(rest.is_none());
    }

    #[test]
    fn test_bad_pointer_is_structural() {
        let mut cursor =
            LineCursor::new(Cursor::new("0 @I1@ INDI\n1 FAMC\n1 FAMS @F1@\n".as_bytes())).unwrap();
        let mut person = Person::new("I1");
        let err = parse_individual(&mut cursor, &mut person).unwrap_err();
        assert!(err.is_structural());
        assert_eq!(cursor.current().unwrap().number, 2);
    }
}
