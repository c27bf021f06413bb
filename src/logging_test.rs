use super::*;

#[test]
fn unix_seconds_writes_integer_epoch() {
    let mut out = String::new();
    UnixSeconds.format_time(&mut Writer::new(&mut out)).unwrap();

    let secs: u64 = out.parse().unwrap_or_else(|_| panic!("not an integer: {out:?}"));
    let now = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_secs();
    assert!(secs <= now && now - secs < 5, "secs={secs} now={now}");
}
