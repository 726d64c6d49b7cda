//! Step navigation scenarios on a scripted console.

mod mocks;

use booking_desk::navigation::{NavHint, Navigation, Navigator, Step, StepOutcome};
use mocks::ScriptedConsole;
use std::io;

fn letter_c(_: &mut ScriptedConsole, input: &str) -> io::Result<StepOutcome<char>> {
    Ok(match input {
        "c" => StepOutcome::Value('c'),
        _ => StepOutcome::Invalid,
    })
}

#[test]
fn test_invalid_inputs_reprompt_until_value() {
    let nav = Navigator::default();
    let mut console = ScriptedConsole::new(&["a", "b", "c"]);
    let step = Step::new("Letter: ").warning("Only c will do.");

    let result = nav.run_step(&mut console, &step, letter_c).unwrap();

    assert_eq!(result, Navigation::Value('c'));
    assert_eq!(console.prompts().len(), 3);
    assert_eq!(console.count_printed("Only c will do."), 2);
}

#[test]
fn test_cancel_token_skips_handler() {
    let nav = Navigator::default();
    let mut console = ScriptedConsole::new(&["x", "c"]);
    let mut calls = 0;

    let result = nav
        .run_step(&mut console, &Step::new("> "), |ctx, input| {
            calls += 1;
            letter_c(ctx, input)
        })
        .unwrap();

    assert_eq!(result, Navigation::Cancelled);
    assert_eq!(calls, 0);
    assert_eq!(console.remaining_inputs(), 1);
}

#[test]
fn test_home_propagates_through_every_level() {
    let nav = Navigator::default();
    let mut console = ScriptedConsole::new(&["1", "2", "q", "unread"]);

    let result: Navigation<()> = nav
        .run_step(&mut console, &Step::new("level 1> "), |ctx, _| {
            let middle: Navigation<()> = nav.run_step(ctx, &Step::new("level 2> "), |ctx, _| {
                let inner: Navigation<()> =
                    nav.run_step(ctx, &Step::new("level 3> "), |_, _| {
                        Ok::<_, io::Error>(StepOutcome::Invalid)
                    })?;
                Ok::<_, io::Error>(inner.into_outcome())
            })?;
            Ok::<_, io::Error>(middle.into_outcome())
        })
        .unwrap();

    assert_eq!(result, Navigation::Home);
    assert_eq!(console.prompts(), ["level 1> ", "level 2> ", "level 3> "]);
    assert_eq!(console.remaining_inputs(), 1);
}

#[test]
fn test_configured_tokens() {
    let nav = Navigator::new("back", "home");
    let mut console = ScriptedConsole::new(&["x", "q", "back"]);
    let step = Step::new("> ").hint(NavHint::BackAndHome);

    let result = nav
        .run_step(&mut console, &step, |_, input| {
            // The default tokens are ordinary input here.
            assert!(input == "x" || input == "q");
            Ok::<_, io::Error>(StepOutcome::<()>::Stay)
        })
        .unwrap();

    assert_eq!(result, Navigation::Cancelled);
    assert!(console.printed("back - <== // home - home"));
}

#[test]
fn test_indent_applies_to_prompt_and_warning() {
    let nav = Navigator::default();
    let mut console = ScriptedConsole::new(&["a", "c"]);
    let step = Step::new("Pick: ").indent("\t\t").warning("Nope.");

    nav.run_step(&mut console, &step, letter_c).unwrap();

    assert_eq!(console.prompts()[0], "\t\tPick: ");
    assert!(console.output().iter().any(|line| line == "\t\tNope."));
}
