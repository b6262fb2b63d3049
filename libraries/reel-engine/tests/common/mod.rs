//! Common test utilities and fixtures

use reel_core::{Catalog, Video};
use reel_engine::{Command, Console, Engine};
use std::collections::VecDeque;

/// Records every reported line and answers selection prompts from a queue
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    pub lines: Vec<String>,
    pub answers: VecDeque<Option<usize>>,
    pub prompts: Vec<usize>,
}

impl ScriptedConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the answer for the next selection prompt
    pub fn answer(&mut self, choice: Option<usize>) {
        self.answers.push_back(choice);
    }

    /// Take the lines reported so far
    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }
}

impl Console for ScriptedConsole {
    fn report(&mut self, message: &str) {
        self.lines.push(message.to_string());
    }

    fn request_selection(&mut self, max: usize) -> Option<usize> {
        self.prompts.push(max);
        self.answers.pop_front().flatten()
    }
}

/// The five videos of the classic catalog
pub fn create_test_catalog() -> Catalog {
    Catalog::new([
        Video::new("funny_dogs_video_id", "Funny Dogs", ["#dog", "#animal"]),
        Video::new("amazing_cats_video_id", "Amazing Cats", ["#cat", "#animal"]),
        Video::new("another_cat_video_id", "Another Cat Video", ["#cat", "#animal"]),
        Video::new("life_at_google_video_id", "Life at Google", ["#google", "#career"]),
        Video::new("nothing_video_id", "Video about nothing", Vec::<String>::new()),
    ])
}

pub fn create_test_engine() -> (Engine, ScriptedConsole) {
    (Engine::new(create_test_catalog()), ScriptedConsole::new())
}

/// Parse and run one line, returning the lines it reported
pub fn run(engine: &mut Engine, console: &mut ScriptedConsole, line: &str) -> Vec<String> {
    let command: Command = line.parse().expect("valid command");
    let _ = engine.execute(&command, console);
    console.take()
}
