//! The interactive command loop
//!
//! Reads commands line by line, dispatches them to the player, and
//! prints whatever comes back. Generic over its input and output
//! streams so whole sessions can run against in-memory buffers in
//! tests.

mod command;

pub use command::Command;

use crate::player::{PlayerError, SearchResults, VideoPlayer};
use anyhow::Result;
use rand::Rng;
use std::io::{BufRead, Write};

const INVALID_COMMAND: &str =
    "Please enter a valid command, type HELP for a list of available commands.";

const HELP_TEXT: &str = "Available commands:
  NUMBER_OF_VIDEOS
  SHOW_ALL_VIDEOS
  PLAY <video_id>
  PLAY_RANDOM
  STOP
  PAUSE
  CONTINUE
  SHOW_PLAYING
  CREATE_PLAYLIST <playlist>
  ADD_TO_PLAYLIST <playlist> <video_id>
  REMOVE_FROM_PLAYLIST <playlist> <video_id>
  CLEAR_PLAYLIST <playlist>
  DELETE_PLAYLIST <playlist>
  SHOW_PLAYLIST <playlist>
  SHOW_ALL_PLAYLISTS
  SEARCH_VIDEOS <term>
  SEARCH_VIDEOS_WITH_TAG <tag>
  FLAG_VIDEO <video_id> [reason]
  ALLOW_VIDEO <video_id>
  HELP
  EXIT";

/// Interactive shell around a [`VideoPlayer`]
///
/// The RNG is injected so PLAY_RANDOM is reproducible in tests.
pub struct Shell<R: Rng> {
    player: VideoPlayer,
    rng: R,
}

impl<R: Rng> Shell<R> {
    pub fn new(player: VideoPlayer, rng: R) -> Self {
        Self { player, rng }
    }

    /// Run the command loop until EXIT or end of input
    pub fn run<I: BufRead, O: Write>(&mut self, mut input: I, mut output: O) -> Result<()> {
        let mut line = String::new();
        loop {
            line.clear();
            if input.read_line(&mut line)? == 0 {
                // EOF behaves like EXIT
                writeln!(output, "Bye!")?;
                return Ok(());
            }

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            match Command::parse(trimmed) {
                None => {
                    log::debug!("Rejected input line: {}", trimmed);
                    writeln!(output, "{}", INVALID_COMMAND)?;
                }
                Some(Command::Exit) => {
                    writeln!(output, "Bye!")?;
                    return Ok(());
                }
                Some(Command::Help) => writeln!(output, "{}", HELP_TEXT)?,
                Some(command) => self.dispatch(command, &mut input, &mut output)?,
            }
        }
    }

    fn dispatch<I: BufRead, O: Write>(
        &mut self,
        command: Command,
        input: &mut I,
        output: &mut O,
    ) -> Result<()> {
        let outcome = match command {
            Command::NumberOfVideos => Ok(self.player.number_of_videos()),
            Command::ShowAllVideos => Ok(self.player.show_all_videos()),
            Command::Play { video_id } => self.player.play_video(&video_id),
            Command::PlayRandom => self.player.play_random_video(&mut self.rng),
            Command::Stop => self.player.stop_video(),
            Command::Pause => self.player.pause_video(),
            Command::Continue => self.player.continue_video(),
            Command::ShowPlaying => Ok(self.player.show_playing()),
            Command::CreatePlaylist { name } => self.player.create_playlist(&name),
            Command::AddToPlaylist { name, video_id } => {
                self.player.add_to_playlist(&name, &video_id)
            }
            Command::RemoveFromPlaylist { name, video_id } => {
                self.player.remove_from_playlist(&name, &video_id)
            }
            Command::ClearPlaylist { name } => self.player.clear_playlist(&name),
            Command::DeletePlaylist { name } => self.player.delete_playlist(&name),
            Command::ShowPlaylist { name } => self.player.show_playlist(&name),
            Command::ShowAllPlaylists => Ok(self.player.show_all_playlists()),
            Command::SearchVideos { term } => {
                let results = self.player.search_videos(&term);
                return self.offer_results(results, input, output);
            }
            Command::SearchVideosWithTag { tag } => {
                let results = self.player.search_videos_with_tag(&tag);
                return self.offer_results(results, input, output);
            }
            Command::FlagVideo { video_id, reason } => self.player.flag_video(&video_id, &reason),
            Command::AllowVideo { video_id } => self.player.allow_video(&video_id),
            // Handled by the caller
            Command::Help | Command::Exit => Ok(Vec::new()),
        };
        Self::report(outcome, output)
    }

    /// Print search results and, if there are any, offer to play one.
    /// Any answer that is not an in-range number is a no.
    fn offer_results<I: BufRead, O: Write>(
        &mut self,
        results: SearchResults,
        input: &mut I,
        output: &mut O,
    ) -> Result<()> {
        for line in results.render() {
            writeln!(output, "{}", line)?;
        }
        if results.is_empty() {
            return Ok(());
        }

        writeln!(
            output,
            "Would you like to play any of the above? If yes, specify the number of the video."
        )?;
        writeln!(
            output,
            "If your answer is not a valid number, we will assume it's a no."
        )?;

        let mut answer = String::new();
        if input.read_line(&mut answer)? == 0 {
            return Ok(());
        }
        if let Ok(choice) = answer.trim().parse::<usize>() {
            if let Some(video_id) = results.video_id(choice) {
                let video_id = video_id.to_string();
                return Self::report(self.player.play_video(&video_id), output);
            }
        }
        Ok(())
    }

    fn report<O: Write>(
        outcome: Result<Vec<String>, PlayerError>,
        output: &mut O,
    ) -> Result<()> {
        match outcome {
            Ok(lines) => {
                for line in lines {
                    writeln!(output, "{}", line)?;
                }
            }
            Err(err) => writeln!(output, "{}", err)?,
        }
        Ok(())
    }
}
