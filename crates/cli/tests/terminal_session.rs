use std::cell::Cell;
use std::io::Cursor;

use chrono::{DateTime, Duration, TimeZone, Utc};
use prodreg_cli::{Clock, Config, Terminal};
use prodreg_products::{Availability, EMPTY_LIST_MESSAGE, FormSession, PRODUCT_ADDED_MESSAGE};

/// Clock that advances by a fixed step on every reading.
struct SteppingClock {
    now: Cell<DateTime<Utc>>,
    step: Duration,
}

impl SteppingClock {
    fn fixed() -> Self {
        Self::stepping(Duration::zero())
    }

    fn stepping(step: Duration) -> Self {
        Self {
            now: Cell::new(Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()),
            step,
        }
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let now = self.now.get();
        self.now.set(now + self.step);
        now
    }
}

fn run_script(script: &str, clock: SteppingClock) -> (FormSession, String) {
    let mut output = Vec::new();
    let session = Terminal::with_clock(&Config::default(), Cursor::new(script), &mut output, clock)
        .run()
        .unwrap();
    (session, String::from_utf8(output).unwrap())
}

#[test]
fn registers_products_in_price_order() {
    let script = "\
add
Lamp
desk lamp
10,50
no
add
Pen
blue ink
2

quit
";
    let (session, output) = run_script(script, SteppingClock::fixed());

    let names: Vec<&str> = session.products().iter().map(|p| p.name()).collect();
    assert_eq!(names, vec!["Pen", "Lamp"]);
    assert_eq!(session.products().as_slice()[0].available(), Availability::Yes);
    assert_eq!(session.products().as_slice()[1].available(), Availability::No);
    assert!(session.products_visible());

    assert!(output.contains(PRODUCT_ADDED_MESSAGE));
    let last_table = output.rfind("Products\n").unwrap();
    let pen = output[last_table..].find("R$ 2,00").unwrap();
    let lamp = output[last_table..].find("R$ 10,50").unwrap();
    assert!(pen < lamp);
}

#[test]
fn reports_every_invalid_field_and_keeps_list() {
    let script = "\
add


10.999
maybe
quit
";
    let (session, output) = run_script(script, SteppingClock::fixed());

    assert!(session.products().is_empty());
    assert!(output.contains("Product not registered:"));
    assert!(output.contains("  name: required field"));
    assert!(output.contains("  description: required field"));
    assert!(output.contains("  value: enter a valid value"));
    assert!(output.contains("  available: choose an option"));
    assert!(!output.contains(PRODUCT_ADDED_MESSAGE));
}

#[test]
fn toggle_shows_empty_list_message() {
    let (session, output) = run_script("toggle\n", SteppingClock::fixed());

    assert!(session.products_visible());
    assert!(output.contains(EMPTY_LIST_MESSAGE));
}

#[test]
fn new_hides_the_list() {
    let script = "add\nMug\nceramic\n3\nyes\nnew\n";
    let (session, output) = run_script(script, SteppingClock::fixed());

    assert_eq!(session.products().len(), 1);
    assert!(!session.products_visible());
    assert!(output.ends_with("[Show products] > "));
}

#[test]
fn notice_is_dismissed_once_expired() {
    let script = "add\nMug\nceramic\n3\n\n\n\n";
    let (session, output) = run_script(script, SteppingClock::stepping(Duration::seconds(2)));

    assert_eq!(output.matches(PRODUCT_ADDED_MESSAGE).count(), 1);
    assert!(session.notice().is_none());
}

#[test]
fn json_dumps_registered_products() {
    let script = "add\nMug\nceramic\n3,5\n\njson\nquit\n";
    let (_, output) = run_script(script, SteppingClock::fixed());

    // Prompts and notices use brackets too; the pretty-printed array is the
    // only place a bracket starts or ends a line on its own.
    let start = output.find("[\n").unwrap();
    let end = start + output[start..].find("\n]").unwrap() + 2;
    let dumped: serde_json::Value = serde_json::from_str(&output[start..end]).unwrap();
    assert_eq!(
        dumped,
        serde_json::json!([{
            "name": "Mug",
            "description": "ceramic",
            "value": 350,
            "available": "yes",
        }])
    );
}

#[test]
fn names_are_registered_as_typed() {
    let (session, _) = run_script("add\n  Mug \nceramic\n3\n\nquit\n", SteppingClock::fixed());
    assert_eq!(session.products().as_slice()[0].name(), "  Mug ");
}

#[test]
fn unknown_command_is_reported() {
    let (_, output) = run_script("dance\nquit\n", SteppingClock::fixed());
    assert!(output.contains("unknown command: dance"));
}

#[test]
fn eof_mid_form_ends_the_session() {
    let (session, _) = run_script("add\nHalf", SteppingClock::fixed());
    assert!(session.products().is_empty());
}
