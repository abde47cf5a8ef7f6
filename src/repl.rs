//! Line-based command dispatch
//!
//! The REPL owns none of the console's rules: it tokenizes a line, maps the
//! case-insensitive command word onto a console operation, and reports usage
//! problems. Everything it prints goes through the console's output sink, so
//! a scripted session produces a single ordered transcript.

use crate::console::Console;
use crate::selection::SelectionSource;
use anyhow::Result;
use std::io::Write;

/// What the loop should do after a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Command list printed by HELP
const HELP_TEXT: &str = "\
Available commands:
  NUMBER_OF_VIDEOS                  Show how many videos are in the library
  SHOW_ALL_VIDEOS                   List every video
  PLAY <video_id>                   Play the given video
  PLAY_RANDOM                       Play a randomly chosen video
  STOP                              Stop the current video
  PAUSE                             Pause the current video
  CONTINUE                          Resume the paused video
  SHOW_PLAYING                      Show the currently playing video
  CREATE_PLAYLIST <name>            Create a new (empty) playlist
  ADD_TO_PLAYLIST <name> <id>       Add a video to a playlist
  REMOVE_FROM_PLAYLIST <name> <id>  Remove a video from a playlist
  CLEAR_PLAYLIST <name>             Remove all videos from a playlist
  DELETE_PLAYLIST <name>            Delete a playlist
  SHOW_PLAYLIST <name>              List the videos in a playlist
  SHOW_ALL_PLAYLISTS                List all playlists
  SEARCH_VIDEOS <term>              Search video titles
  SEARCH_VIDEOS_WITH_TAG <tag>      Search videos by tag
  FLAG_VIDEO <id> [reason]          Flag a video
  ALLOW_VIDEO <id>                  Remove a video's flag
  HELP                              Show this list
  EXIT                              End the session";

/// Execute one input line against the console
///
/// Blank lines are ignored. Unknown commands and missing arguments produce a
/// hint on the console's sink; neither is an error.
pub fn execute_line<W: Write, S: SelectionSource>(
    console: &mut Console<W, S>,
    line: &str,
) -> Result<Flow> {
    let mut tokens = line.split_whitespace();
    let Some(word) = tokens.next() else {
        return Ok(Flow::Continue);
    };
    let command = word.to_uppercase();
    let args: Vec<&str> = tokens.collect();

    log::debug!("Dispatching {} with {} argument(s)", command, args.len());

    match command.as_str() {
        "NUMBER_OF_VIDEOS" => console.number_of_videos()?,
        "SHOW_ALL_VIDEOS" => console.show_all_videos()?,
        "PLAY" => match args.first() {
            Some(id) => console.play_video(id)?,
            None => console.note("PLAY requires a video id (PLAY <video_id>).")?,
        },
        "PLAY_RANDOM" => console.play_random_video()?,
        "STOP" => console.stop_video()?,
        "PAUSE" => console.pause_video()?,
        "CONTINUE" => console.continue_video()?,
        "SHOW_PLAYING" => console.show_playing()?,
        "CREATE_PLAYLIST" => match args.first() {
            Some(name) => console.create_playlist(name)?,
            None => console.note("CREATE_PLAYLIST requires a name (CREATE_PLAYLIST <name>).")?,
        },
        "ADD_TO_PLAYLIST" => match (args.first(), args.get(1)) {
            (Some(name), Some(id)) => console.add_to_playlist(name, id)?,
            _ => console.note("ADD_TO_PLAYLIST requires a playlist name and a video id.")?,
        },
        "REMOVE_FROM_PLAYLIST" => match (args.first(), args.get(1)) {
            (Some(name), Some(id)) => console.remove_from_playlist(name, id)?,
            _ => console.note("REMOVE_FROM_PLAYLIST requires a playlist name and a video id.")?,
        },
        "CLEAR_PLAYLIST" => match args.first() {
            Some(name) => console.clear_playlist(name)?,
            None => console.note("CLEAR_PLAYLIST requires a name (CLEAR_PLAYLIST <name>).")?,
        },
        "DELETE_PLAYLIST" => match args.first() {
            Some(name) => console.delete_playlist(name)?,
            None => console.note("DELETE_PLAYLIST requires a name (DELETE_PLAYLIST <name>).")?,
        },
        "SHOW_PLAYLIST" => match args.first() {
            Some(name) => console.show_playlist(name)?,
            None => console.note("SHOW_PLAYLIST requires a name (SHOW_PLAYLIST <name>).")?,
        },
        "SHOW_ALL_PLAYLISTS" => console.show_all_playlists()?,
        "SEARCH_VIDEOS" => match args.first() {
            Some(term) => console.search_videos(term)?,
            None => console.note("SEARCH_VIDEOS requires a search term.")?,
        },
        "SEARCH_VIDEOS_WITH_TAG" => match args.first() {
            Some(tag) => console.search_videos_with_tag(tag)?,
            None => console.note("SEARCH_VIDEOS_WITH_TAG requires a tag.")?,
        },
        "FLAG_VIDEO" => match args.first() {
            Some(id) => console.flag_video(id, args.get(1).copied())?,
            None => console.note("FLAG_VIDEO requires a video id (FLAG_VIDEO <video_id> [reason]).")?,
        },
        "ALLOW_VIDEO" => match args.first() {
            Some(id) => console.allow_video(id)?,
            None => console.note("ALLOW_VIDEO requires a video id (ALLOW_VIDEO <video_id>).")?,
        },
        "HELP" => console.note(HELP_TEXT)?,
        "EXIT" => return Ok(Flow::Exit),
        _ => console.note(&format!(
            "Unknown command: {} (type HELP for a list of commands.)",
            word
        ))?,
    }

    Ok(Flow::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Catalog, Video};
    use crate::selection::NoSelection;

    fn catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.add_video(Video::new("cats_id", "Amazing Cats", vec!["#cat".to_string()]));
        catalog
    }

    fn run_lines(lines: &[&str]) -> (String, Flow) {
        let mut out = Vec::new();
        let mut console = Console::new(catalog(), &mut out, NoSelection);
        let mut flow = Flow::Continue;
        for line in lines {
            flow = execute_line(&mut console, line).unwrap();
        }
        drop(console);
        (String::from_utf8(out).unwrap(), flow)
    }

    #[test]
    fn test_commands_are_case_insensitive() {
        let (text, _) = run_lines(&["number_of_videos"]);
        assert_eq!(text, "1 videos in the library\n");
    }

    #[test]
    fn test_arguments_keep_their_case() {
        let (text, _) = run_lines(&["play CATS_ID"]);
        assert_eq!(text, "Cannot play video: Video does not exist\n");

        let (text, _) = run_lines(&["PLAY cats_id"]);
        assert_eq!(text, "Playing video: Amazing Cats\n");
    }

    #[test]
    fn test_unknown_command() {
        let (text, flow) = run_lines(&["DANCE"]);
        assert_eq!(text, "Unknown command: DANCE (type HELP for a list of commands.)\n");
        assert_eq!(flow, Flow::Continue);
    }

    #[test]
    fn test_missing_argument_hint() {
        let (text, _) = run_lines(&["PLAY"]);
        assert_eq!(text, "PLAY requires a video id (PLAY <video_id>).\n");

        let (text, _) = run_lines(&["ADD_TO_PLAYLIST only_name"]);
        assert_eq!(
            text,
            "ADD_TO_PLAYLIST requires a playlist name and a video id.\n"
        );
    }

    #[test]
    fn test_blank_line_is_ignored() {
        let (text, flow) = run_lines(&["   "]);
        assert_eq!(text, "");
        assert_eq!(flow, Flow::Continue);
    }

    #[test]
    fn test_exit_stops_the_loop() {
        let (text, flow) = run_lines(&["exit"]);
        assert_eq!(text, "");
        assert_eq!(flow, Flow::Exit);
    }

    #[test]
    fn test_flag_video_optional_reason() {
        let (text, _) = run_lines(&["FLAG_VIDEO cats_id dont_like_cats"]);
        assert_eq!(
            text,
            "Successfully flagged video: Amazing Cats (reason: dont_like_cats)\n"
        );

        let (text, _) = run_lines(&["FLAG_VIDEO cats_id"]);
        assert_eq!(
            text,
            "Successfully flagged video: Amazing Cats (reason: Not supplied)\n"
        );
    }

    #[test]
    fn test_help_lists_every_command() {
        let (text, _) = run_lines(&["HELP"]);
        for command in [
            "NUMBER_OF_VIDEOS",
            "SHOW_ALL_VIDEOS",
            "PLAY ",
            "PLAY_RANDOM",
            "STOP",
            "PAUSE",
            "CONTINUE",
            "SHOW_PLAYING",
            "CREATE_PLAYLIST",
            "ADD_TO_PLAYLIST",
            "REMOVE_FROM_PLAYLIST",
            "CLEAR_PLAYLIST",
            "DELETE_PLAYLIST",
            "SHOW_PLAYLIST ",
            "SHOW_ALL_PLAYLISTS",
            "SEARCH_VIDEOS ",
            "SEARCH_VIDEOS_WITH_TAG",
            "FLAG_VIDEO",
            "ALLOW_VIDEO",
            "HELP",
            "EXIT",
        ] {
            assert!(text.contains(command), "HELP is missing {command}");
        }
    }
}
