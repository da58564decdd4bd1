use std::time::Duration;

use colored::Colorize;
use tokio::io::{AsyncBufReadExt, BufReader};

use ch_core::Language;
use ch_reveal::{
    DirectTransport, FortuneTransport, Hand, HttpTransport, Landmark, LandmarkFrame,
    RevealController, SessionEvent, SessionHandle, SessionUpdate, Snapshot, spawn_session,
};

pub async fn run(
    lang: Language,
    server: Option<&str>,
    timeout_secs: u64,
    seed: Option<u64>,
) -> Result<(), String> {
    let controller = match seed {
        Some(seed) => RevealController::seeded(lang, seed),
        None => RevealController::new(lang),
    };

    match server {
        Some(url) => {
            let transport =
                HttpTransport::new(url).with_timeout(Duration::from_secs(timeout_secs));
            session(controller, transport).await
        }
        None => {
            let service = super::service_from_env(seed)?;
            session(controller, DirectTransport::new(service)).await
        }
    }
}

/// A parsed line of console input.
#[derive(Debug, PartialEq)]
enum Input {
    Empty,
    Help,
    Quit,
    Event(SessionEvent),
    Frame(LandmarkFrame),
}

fn parse_input(line: &str) -> Result<Input, String> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let Some(cmd) = parts.first() else {
        return Ok(Input::Empty);
    };

    match cmd.to_lowercase().as_str() {
        "start" => Ok(Input::Event(SessionEvent::Start)),
        "click" | "flip" => Ok(Input::Event(SessionEvent::Click)),
        "reset" | "again" => Ok(Input::Event(SessionEvent::Reset)),
        "status" => Ok(Input::Event(SessionEvent::Status)),
        "lang" => {
            let code = parts.get(1).ok_or("usage: lang <en|zh>")?;
            let lang: Language = code.parse().map_err(|e| format!("{e}"))?;
            Ok(Input::Event(SessionEvent::SetLanguage(lang)))
        }
        "pinch" => {
            let coords: Vec<f32> = parts[1..]
                .iter()
                .map(|s| s.parse::<f32>())
                .collect::<Result<_, _>>()
                .map_err(|_| "usage: pinch <thumb-x> <thumb-y> <index-x> <index-y>")?;
            let [tx, ty, ix, iy] = coords[..] else {
                return Err("usage: pinch <thumb-x> <thumb-y> <index-x> <index-y>".into());
            };
            let hand = Hand::with_tips(Landmark::new(tx, ty), Landmark::new(ix, iy));
            Ok(Input::Frame(LandmarkFrame::single(hand)))
        }
        "release" => Ok(Input::Frame(LandmarkFrame::empty())),
        "help" | "?" => Ok(Input::Help),
        "quit" | "q" | "exit" => Ok(Input::Quit),
        other => Err(format!("unknown command: {other} (type 'help')")),
    }
}

fn print_help() {
    println!("  start                     lay the card on the table");
    println!("  click                     flip the card");
    println!("  pinch <tx> <ty> <ix> <iy> send a hand frame (thumb tip, index tip)");
    println!("  release                   send a frame with no hand");
    println!("  lang <en|zh>              change the reading language");
    println!("  reset                     draw again");
    println!("  status                    show the session state");
    println!("  quit                      leave");
}

fn print_status(s: &Snapshot) {
    let card = s.card.map(|c| c.to_string()).unwrap_or_else(|| "-".into());
    println!(
        "Phase: {} | Language: {} | Card: {card}{}",
        s.phase,
        s.language,
        if s.pending { " | consulting" } else { "" }
    );
    if let Some(fortune) = &s.fortune {
        println!("Fortune: {fortune}");
    }
}

fn print_update(update: &SessionUpdate) {
    match update {
        SessionUpdate::PhaseChanged(phase) => match phase {
            ch_reveal::Phase::Idle => println!("The deck is shuffled. Type 'start' to begin."),
            ch_reveal::Phase::Reading => {
                println!("The card awaits. Type 'click' or pinch to reveal.")
            }
            ch_reveal::Phase::Result => println!("Type 'reset' to draw again.\n"),
        },
        SessionUpdate::Consulting { card, language } => {
            println!("{}: {}", card.name(*language).bold(), language.consulting().dimmed());
        }
        SessionUpdate::Revealed(reading) => {
            let at = reading.revealed_at.format("revealed %H:%M:%S UTC");
            println!("\n  {}", reading.card.name(reading.language).bold());
            println!("  {}", reading.fortune);
            println!("  {}\n", at.to_string().dimmed());
        }
        SessionUpdate::LanguageChanged(lang) => println!("Language: {lang}"),
        SessionUpdate::Status(snapshot) => print_status(snapshot),
        SessionUpdate::Discarded { .. } => {}
    }
}

struct Console {
    handle: SessionHandle,
    /// Status requests typed by the user and not yet answered.
    status_requests: usize,
}

impl Console {
    fn show(&mut self, update: &SessionUpdate) {
        if matches!(update, SessionUpdate::Status(_)) {
            self.status_requests = self.status_requests.saturating_sub(1);
        }
        print_update(update);
    }

    /// Wait for an outstanding reveal before leaving.
    async fn settle(&mut self) {
        if self.handle.send(SessionEvent::Status).await.is_err() {
            return;
        }
        let mut waiting = false;
        while let Some(update) = self.handle.next_update().await {
            match &update {
                SessionUpdate::Status(s) if self.status_requests == 0 && !waiting => {
                    if !s.pending {
                        return;
                    }
                    waiting = true;
                }
                SessionUpdate::Revealed(_) if waiting => {
                    print_update(&update);
                    return;
                }
                _ => self.show(&update),
            }
        }
    }
}

async fn session<T: FortuneTransport>(
    controller: RevealController,
    transport: T,
) -> Result<(), String> {
    let mut console = Console {
        handle: spawn_session(controller, transport),
        status_requests: 0,
    };

    println!("  {} Celestial Hand", "Shuffling".bold());
    println!("  Type 'help' for commands, 'quit' to exit.\n");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.map_err(|e| e.to_string())? else {
                    break;
                };
                match parse_input(&line) {
                    Ok(Input::Empty) => {}
                    Ok(Input::Help) => print_help(),
                    Ok(Input::Quit) => break,
                    Ok(Input::Event(event)) => {
                        if event == SessionEvent::Status {
                            console.status_requests += 1;
                        }
                        console.handle.send(event).await.map_err(|e| e.to_string())?;
                    }
                    Ok(Input::Frame(frame)) => console.handle.push_frame(frame),
                    Err(msg) => println!("{}", msg.yellow()),
                }
            }
            update = console.handle.next_update() => match update {
                Some(update) => console.show(&update),
                None => break,
            },
        }
    }

    console.settle().await;
    console.handle.shutdown().await;
    println!("The stars bid you farewell.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_commands() {
        assert_eq!(parse_input("  ").unwrap(), Input::Empty);
        assert_eq!(parse_input("start").unwrap(), Input::Event(SessionEvent::Start));
        assert_eq!(parse_input("CLICK").unwrap(), Input::Event(SessionEvent::Click));
        assert_eq!(parse_input("q").unwrap(), Input::Quit);
    }

    #[test]
    fn parses_language() {
        assert_eq!(
            parse_input("lang zh").unwrap(),
            Input::Event(SessionEvent::SetLanguage(Language::Zh))
        );
        assert!(parse_input("lang").is_err());
        assert!(parse_input("lang fr").is_err());
    }

    #[test]
    fn parses_pinch_frame() {
        let Input::Frame(frame) = parse_input("pinch 0.5 0.5 0.52 0.5").unwrap() else {
            panic!("expected a frame");
        };
        let d = frame.hands[0].pinch_distance().unwrap();
        assert!((d - 0.02).abs() < 1e-5);
        assert!(parse_input("pinch 0.5 0.5").is_err());
        assert!(parse_input("pinch a b c d").is_err());
    }

    #[test]
    fn unknown_command() {
        let err = parse_input("shuffle").unwrap_err();
        assert!(err.contains("unknown command"));
    }
}
