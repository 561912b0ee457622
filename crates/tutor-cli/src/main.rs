//! Interactive command-line shell for the AI tutor.
//!
//! A thin, stateless display loop: all pipeline logic lives in the
//! `tutor` crate. Commands: `stats`, `clear`, `save`, and
//! `quit`/`exit`/`bye`.

use std::io::{self, BufRead, Write};

use tracing::error;
use tutor::{AiTeacher, ConversationTurn};

const TRANSCRIPT_FILE: &str = "chat_history.txt";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let mut teacher = match AiTeacher::from_env() {
        Ok(teacher) => teacher,
        Err(e) => {
            error!("Failed to start tutor: {}", e);
            eprintln!("Failed to start tutor: {}", e);
            std::process::exit(1);
        }
    };

    println!("AI Teacher Chatbot");
    println!("Ask questions in English, Hindi, or Telugu!");
    println!("Commands: 'stats', 'clear', 'save', 'quit'");

    let stdin = io::stdin();
    let mut transcript: Vec<ConversationTurn> = Vec::new();

    loop {
        print!("\nYou: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();

        match input.to_lowercase().as_str() {
            "" => continue,
            "quit" | "exit" | "bye" => break,
            "stats" => {
                let stats = teacher.stats();
                println!("Messages: {}", stats.total_messages);
                println!("Languages: {}", join_display(&stats.languages_used));
                println!("Subjects: {}", join_display(&stats.subjects_discussed));
            }
            "clear" => {
                teacher.clear_history();
                transcript.clear();
                println!("History cleared.");
            }
            "save" => match save_transcript(&transcript) {
                Ok(()) => println!("Transcript saved to {}", TRANSCRIPT_FILE),
                Err(e) => eprintln!("Failed to save transcript: {}", e),
            },
            _ => {
                println!("Thinking...");
                let turn = teacher.chat(input).await;
                println!(
                    "Teacher ({} | {}):",
                    turn.language_name,
                    title_case(turn.category.tag())
                );
                println!("{}", turn.response);
                transcript.push(turn);
            }
        }
    }

    println!("Goodbye! Happy learning!");
    Ok(())
}

fn join_display<T: std::fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn title_case(tag: &str) -> String {
    let mut chars = tag.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn save_transcript(turns: &[ConversationTurn]) -> io::Result<()> {
    let mut text = String::new();
    for turn in turns {
        let timestamp = turn.timestamp.format("%Y-%m-%d %H:%M:%S");
        text.push_str(&format!("[{}] You: {}\n", timestamp, turn.user_input));
        text.push_str(&format!(
            "[{}] Teacher ({} | {}): {}\n\n",
            timestamp,
            turn.language_name,
            title_case(turn.category.tag()),
            turn.response
        ));
    }
    std::fs::write(TRANSCRIPT_FILE, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("math"), "Math");
        assert_eq!(title_case("general"), "General");
        assert_eq!(title_case(""), "");
    }
}
