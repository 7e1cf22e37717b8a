//! Shared fixture: four generations of the Smith family.
//!
//! ```text
//! Adam + Beth                                 (F1)
//! ├── Carl + Fay                              (F2)
//! │   ├── Gus + Ona                           (F6)
//! │   │   └── Pat
//! │   └── Hal
//! ├── Dora + Ian                              (F3)
//! │   └── Jen + Quin                          (F7)
//! │       └── Rae
//! └── Ed Jr. + Kim (F4) -> Lou, Ed + Mae (F5) -> Ned
//! ```

use crate::parser::parse_str;
use crate::registry::Registry;

pub(crate) const SAMPLE: &str = "\
0 HEAD
1 SOUR kinship-tests
1 GEDC
2 VERS 5.5.1
0 @I1@ INDI
1 NAME Adam /Smith/
1 SEX M
1 BIRT
2 DATE 1 JAN 1900
2 PLAC Boston, MA
1 DEAT
2 DATE 1970
1 FAMS @F1@
0 @I2@ INDI
1 NAME Beth /Jones/
1 FAMS @F1@
0 @I3@ INDI
1 NAME Carl /Smith/
1 FAMC @F1@
1 FAMS @F2@
0 @I4@ INDI
1 NAME Dora /Smith/
1 FAMC @F1@
1 FAMS @F3@
0 @I5@ INDI
1 NAME Ed /Smith/ Jr.
1 FAMC @F1@
1 FAMS @F4@
1 FAMS @F5@
0 @I6@ INDI
1 NAME Fay /Brown/
1 FAMS @F2@
0 @I7@ INDI
1 NAME Ian /White/
1 FAMS @F3@
0 @I8@ INDI
1 NAME Gus /Smith/
1 FAMC @F2@
1 FAMS @F6@
0 @I9@ INDI
1 NAME Hal /Smith/
1 FAMC @F2@
0 @I10@ INDI
1 NAME Jen /White/
1 FAMC @F3@
1 FAMS @F7@
0 @I11@ INDI
1 NAME Kim /Black/
1 FAMS @F4@
0 @I12@ INDI
1 NAME Lou /Smith/
1 FAMC @F4@
0 @I13@ INDI
1 NAME Mae /Green/
1 FAMS @F5@
0 @I14@ INDI
1 NAME Ned /Smith/
1 FAMC @F5@
0 @I15@ INDI
1 NAME Ona /Gray/
1 FAMS @F6@
0 @I16@ INDI
1 NAME Pat /Smith/
1 FAMC @F6@
0 @I17@ INDI
1 NAME Quin /Stone/
1 FAMS @F7@
0 @I18@ INDI
1 NAME Rae /Stone/
1 FAMC @F7@
0 @F1@ FAM
1 HUSB @I1@
1 WIFE @I2@
1 MARR
2 DATE 1925
1 CHIL @I3@
1 CHIL @I4@
1 CHIL @I5@
0 @F2@ FAM
1 HUSB @I3@
1 WIFE @I6@
1 CHIL @I8@
1 CHIL @I9@
0 @F3@ FAM
1 HUSB @I7@
1 WIFE @I4@
1 CHIL @I10@
0 @F4@ FAM
1 HUSB @I5@
1 WIFE @I11@
1 CHIL @I12@
0 @F5@ FAM
1 HUSB @I5@
1 WIFE @I13@
1 CHIL @I14@
0 @F6@ FAM
1 HUSB @I8@
1 WIFE @I15@
1 CHIL @I16@
0 @F7@ FAM
1 HUSB @I17@
1 WIFE @I10@
1 CHIL @I18@
0 TRLR
";

pub(crate) fn sample_registry() -> Registry {
    parse_str(SAMPLE).expect("sample parses").into_registry()
}
