//! `nom`-based parser for the `H` and `B` records of an IGC file.
//!

use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use nom::bytes::complete::{take, take_while_m_n};
use nom::character::complete::{char, one_of};
use nom::combinator::{map, map_opt, map_res, rest};
use nom::sequence::{preceded, tuple};
use nom::IResult;
use tracing::{debug, trace};

use crate::{Fix, Header, IgcError, Track, Validity};

/// Going back in time by more than this between two fixes means we crossed midnight UTC.
const ROLLOVER_SECS: i64 = 12 * 3_600;

/// Fix as read from the file, before we know which day it belongs to.
///
#[derive(Debug, PartialEq)]
struct RawFix {
    time: NaiveTime,
    latitude: f64,
    longitude: f64,
    validity: Validity,
    pressure_alt: i32,
    gnss_alt: i32,
}

/// Exactly `n` ASCII digits.
///
fn number<'a>(n: usize) -> impl FnMut(&'a str) -> IResult<&'a str, u32> {
    map_res(take_while_m_n(n, n, |c: char| c.is_ascii_digit()), |s: &str| {
        s.parse::<u32>()
    })
}

/// `HHMMSS`
///
fn parse_time(input: &str) -> IResult<&str, NaiveTime> {
    map_opt(tuple((number(2), number(2), number(2))), |(h, m, s)| {
        NaiveTime::from_hms_opt(h, m, s)
    })(input)
}

/// `DDMMmmm` + `N`/`S`
///
fn parse_latitude(input: &str) -> IResult<&str, f64> {
    map(tuple((number(2), number(5), one_of("NS"))), |(deg, min, hemi)| {
        let lat = deg as f64 + min as f64 / 60_000.;
        if hemi == 'S' {
            -lat
        } else {
            lat
        }
    })(input)
}

/// `DDDMMmmm` + `E`/`W`
///
fn parse_longitude(input: &str) -> IResult<&str, f64> {
    map(tuple((number(3), number(5), one_of("EW"))), |(deg, min, hemi)| {
        let lon = deg as f64 + min as f64 / 60_000.;
        if hemi == 'W' {
            -lon
        } else {
            lon
        }
    })(input)
}

fn parse_validity(input: &str) -> IResult<&str, Validity> {
    map(one_of("AV"), |c| match c {
        'A' => Validity::A,
        _ => Validity::V,
    })(input)
}

/// Five characters, possibly with a leading `-`.
///
fn parse_altitude(input: &str) -> IResult<&str, i32> {
    map_res(take(5usize), |s: &str| s.trim().parse::<i32>())(input)
}

/// Whole `B` record, anything after the GNSS altitude (extensions) is left unparsed.
///
fn parse_fix(input: &str) -> IResult<&str, RawFix> {
    preceded(
        char('B'),
        map(
            tuple((
                parse_time,
                parse_latitude,
                parse_longitude,
                parse_validity,
                parse_altitude,
                parse_altitude,
            )),
            |(time, latitude, longitude, validity, pressure_alt, gnss_alt)| RawFix {
                time,
                latitude,
                longitude,
                validity,
                pressure_alt,
                gnss_alt,
            },
        ),
    )(input)
}

/// `H` + source (`F`, `O` or `P`) + three-letter code, the rest is the payload.
///
fn parse_header(input: &str) -> IResult<&str, (&str, &str)> {
    preceded(char('H'), preceded(one_of("FOP"), tuple((take(3usize), rest))))(input)
}

/// Payload is either `VALUE` or `LONG NAME:VALUE`.
///
fn header_value(payload: &str) -> &str {
    match payload.split_once(':') {
        Some((_, value)) => value.trim(),
        None => payload.trim(),
    }
}

/// `DDMMYY`, optionally followed by `,NN` (flight number of the day).
///
fn header_date(payload: &str) -> Option<NaiveDate> {
    let value = header_value(payload);
    let value = value.split(',').next()?.trim();
    let ddmmyy = value.get(..6)?;
    NaiveDate::parse_from_str(ddmmyy, "%d%m%y").ok()
}

/// Set `field` only once, first non-empty value wins.
///
fn set_once(field: &mut String, payload: &str) {
    if field.is_empty() {
        *field = header_value(payload).to_string();
    }
}

/// Entry point for the IGC format.
///
#[derive(Debug)]
pub struct Igc;

impl Igc {
    /// Decode the text of an IGC file.
    ///
    /// Fails if there is no date header, if a `B` record is malformed or if there is no
    /// `B` record at all.  Fix timestamps roll over to the next day when the time of day
    /// jumps back by more than 12 hours, a fix slightly out of order stays on the same day.
    ///
    #[tracing::instrument(skip(input))]
    pub fn parse(input: &str) -> Result<Track, IgcError> {
        let mut pilot = String::new();
        let mut glider_type = String::new();
        let mut glider_id = String::new();
        let mut date = None;
        let mut raw = vec![];

        for (n, line) in input.lines().enumerate() {
            let line = line.trim_end_matches('\r');
            let lineno = n + 1;

            match line.chars().next() {
                Some('H') => {
                    let Ok((_, (code, payload))) = parse_header(line) else {
                        trace!("skipping header at line {lineno}");
                        continue;
                    };
                    match code {
                        "DTE" => {
                            let d = header_date(payload)
                                .ok_or_else(|| IgcError::BadDate(lineno, line.to_string()))?;
                            date.get_or_insert(d);
                        }
                        "PLT" => set_once(&mut pilot, payload),
                        "GTY" => set_once(&mut glider_type, payload),
                        "GID" => set_once(&mut glider_id, payload),
                        _ => trace!("ignoring H{code}"),
                    }
                }
                Some('B') => {
                    let (_, fix) =
                        parse_fix(line).map_err(|_| IgcError::BadFix(lineno, line.to_string()))?;
                    raw.push(fix);
                }
                _ => (),
            }
        }

        let date = date.ok_or(IgcError::MissingDate)?;
        if raw.is_empty() {
            return Err(IgcError::NoFixes);
        }
        debug!("{} fixes on {}", raw.len(), date);

        let mut day = date;
        let mut last: Option<NaiveTime> = None;
        let fixes = raw
            .into_iter()
            .map(|r| {
                if let Some(prev) = last {
                    if prev.signed_duration_since(r.time).num_seconds() > ROLLOVER_SECS {
                        day = day.succ_opt().unwrap_or(day);
                    }
                }
                last = Some(r.time);

                let elevation = if r.gnss_alt != 0 {
                    r.gnss_alt
                } else {
                    r.pressure_alt
                };
                Fix {
                    time: Utc.from_utc_datetime(&day.and_time(r.time)),
                    latitude: r.latitude,
                    longitude: r.longitude,
                    elevation: elevation as f64,
                    pressure_alt: r.pressure_alt,
                    validity: r.validity,
                }
            })
            .collect();

        Ok(Track {
            header: Header {
                pilot,
                glider_type,
                glider_id,
                date,
            },
            fixes,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Timelike};
    use rstest::rstest;

    use super::*;

    const SAMPLE: &str = "AXCT7bd1c8a1aa8f2b3\r\n\
HFDTE020715\r\n\
HFPLTPILOTINCHARGE: Miguel Angel Gordillo\r\n\
HFGTYGLIDERTYPE:RV8\r\n\
HFGIDGLIDERID:EC-XLL\r\n\
HFDTM100GPSDATUM:WGS-1984\r\n\
I033638FXA3940SIU4143ENL\r\n\
B1101355206343N00006198WA0058700558\r\n\
B1101455206259N00006295WA0059300556\r\n\
B1101555206300N00006061WV0059300556\r\n\
LXCT SOMETHING\r\n\
G5D3A0F\r\n";

    #[inline]
    fn shorten(v: f64) -> String {
        format!("{:.5}", v)
    }

    #[test]
    fn test_parse_sample() {
        let t = Igc::parse(SAMPLE).unwrap();

        assert_eq!("Miguel Angel Gordillo", t.header.pilot);
        assert_eq!("RV8", t.header.glider_type);
        assert_eq!("EC-XLL", t.header.glider_id);
        assert_eq!(NaiveDate::from_ymd_opt(2015, 7, 2).unwrap(), t.header.date);
        assert_eq!(3, t.fixes.len());

        let first = &t.fixes[0];
        assert_eq!(shorten(52.10572), shorten(first.latitude));
        assert_eq!(shorten(-0.10330), shorten(first.longitude));
        assert_eq!(587, first.pressure_alt);
        assert_eq!(558., first.elevation);
        assert_eq!(Validity::A, first.validity);
        assert_eq!(11, first.time.hour());
        assert_eq!(35, first.time.second());
        assert_eq!(Validity::V, t.fixes[2].validity);
    }

    #[rstest]
    #[case("5206343N", 52.10572)]
    #[case("3330000S", -33.5)]
    #[case("0000000N", 0.)]
    fn test_parse_latitude(#[case] inp: &str, #[case] out: f64) {
        let (_, lat) = parse_latitude(inp).unwrap();
        assert_eq!(shorten(out), shorten(lat));
    }

    #[rstest]
    #[case("00006198W", -0.10330)]
    #[case("01015000E", 10.25)]
    #[case("12030000E", 120.5)]
    fn test_parse_longitude(#[case] inp: &str, #[case] out: f64) {
        let (_, lon) = parse_longitude(inp).unwrap();
        assert_eq!(shorten(out), shorten(lon));
    }

    #[rstest]
    #[case("00587", 587)]
    #[case("-0012", -12)]
    #[case("00000", 0)]
    fn test_parse_altitude(#[case] inp: &str, #[case] out: i32) {
        let (_, alt) = parse_altitude(inp).unwrap();
        assert_eq!(out, alt);
    }

    #[rstest]
    #[case("020715")]
    #[case("DATE:020715")]
    #[case("DATE:020715,01")]
    fn test_header_date(#[case] inp: &str) {
        assert_eq!(NaiveDate::from_ymd_opt(2015, 7, 2), header_date(inp));
    }

    #[rstest]
    #[case("PILOTINCHARGE: John Doe", "John Doe")]
    #[case("PILOT:Jane", "Jane")]
    #[case("Bare value ", "Bare value")]
    #[case("", "")]
    fn test_header_value(#[case] inp: &str, #[case] out: &str) {
        assert_eq!(out, header_value(inp));
    }

    #[test]
    fn test_parse_fix_with_extension() {
        let (left, fix) = parse_fix("B1101355206343N00006198WA0058700558001002003").unwrap();
        assert_eq!("001002003", left);
        assert_eq!(NaiveTime::from_hms_opt(11, 1, 35).unwrap(), fix.time);
    }

    #[rstest]
    #[case("B2501355206343N00006198WA0058700558")]
    #[case("B1101355206343X00006198WA0058700558")]
    #[case("B110135520634")]
    fn test_parse_fix_bad(#[case] inp: &str) {
        assert!(parse_fix(inp).is_err());
    }

    #[test]
    fn test_parse_fallback_pressure_altitude() {
        let data = "HFDTE020715\nB1101355206343N00006198WA0058700000\n";
        let t = Igc::parse(data).unwrap();
        assert_eq!(587., t.fixes[0].elevation);
    }

    #[test]
    fn test_parse_midnight_rollover() {
        let data = "HFDTE311215\n\
B2359505206343N00006198WA0058700558\n\
B0000105206343N00006198WA0058700558\n";
        let t = Igc::parse(data).unwrap();

        assert_eq!(31, t.fixes[0].time.day());
        assert_eq!(2016, t.fixes[1].time.year());
        assert_eq!(1, t.fixes[1].time.day());
        assert_eq!(1, t.fixes[1].time.month());
    }

    #[test]
    fn test_parse_out_of_order_same_day() {
        let data = "HFDTE020715\n\
B1101355206343N00006198WA0058700558\n\
B1101345206259N00006295WA0059300556\n\
B1101365206300N00006061WA0059300556\n";
        let t = Igc::parse(data).unwrap();

        assert_eq!(3, t.fixes.len());
        for f in &t.fixes {
            assert_eq!(2, f.time.day());
            assert_eq!(7, f.time.month());
        }
        assert_eq!(34, t.fixes[1].time.second());
    }

    #[test]
    fn test_parse_empty_headers() {
        let data = "HFDTE020715\nB1101355206343N00006198WA0058700558\n";
        let t = Igc::parse(data).unwrap();

        assert!(t.header.pilot.is_empty());
        assert!(t.header.glider_type.is_empty());
        assert!(t.header.glider_id.is_empty());
    }

    #[test]
    fn test_parse_missing_date() {
        let data = "HFPLTPILOT:Jane\nB1101355206343N00006198WA0058700558\n";
        assert_eq!(Err(IgcError::MissingDate), Igc::parse(data));
    }

    #[test]
    fn test_parse_bad_date() {
        let data = "HFDTE321315\nB1101355206343N00006198WA0058700558\n";
        assert!(matches!(Igc::parse(data), Err(IgcError::BadDate(1, _))));
    }

    #[test]
    fn test_parse_no_fixes() {
        let data = "HFDTE020715\nHFPLTPILOT:Jane\n";
        assert_eq!(Err(IgcError::NoFixes), Igc::parse(data));
    }

    #[test]
    fn test_parse_bad_fix_line() {
        let data = "HFDTE020715\nB1101355206343N00006198WA0058700558\nBgarbage\n";
        assert!(matches!(Igc::parse(data), Err(IgcError::BadFix(3, _))));
    }

    #[test]
    fn test_parse_not_igc() {
        assert_eq!(Err(IgcError::MissingDate), Igc::parse("<html></html>"));
    }
}
