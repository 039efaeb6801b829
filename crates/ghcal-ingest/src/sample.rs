/// Small occupancy sheet for trying the tool without a real export.
///
/// Month labels appear only on the first row of each month, and some room
/// cells hold a lone space, the way hand-maintained sheets usually look.
pub const SAMPLE_CSV: &str = "\
Months,Date,Room 01,Room 02,Room 03,Room 04,Room 05,Room 06
JANUARY,1,John Doe,Mary,,Alex,,
,2, ,Mary,Peter,,Anna,
,3,John Doe,,Peter,,Anna,Tom
FEBRUARY,1, , , , , , 
,2,Alice,Bob, , , , ";
