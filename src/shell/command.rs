/// A parsed shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    NumberOfVideos,
    ShowAllVideos,
    Play { video_id: String },
    PlayRandom,
    Stop,
    Pause,
    Continue,
    ShowPlaying,
    CreatePlaylist { name: String },
    AddToPlaylist { name: String, video_id: String },
    RemoveFromPlaylist { name: String, video_id: String },
    ClearPlaylist { name: String },
    DeletePlaylist { name: String },
    ShowPlaylist { name: String },
    ShowAllPlaylists,
    SearchVideos { term: String },
    SearchVideosWithTag { tag: String },
    FlagVideo { video_id: String, reason: String },
    AllowVideo { video_id: String },
    Help,
    Exit,
}

impl Command {
    /// Parse one non-blank input line. The keyword is case-insensitive;
    /// arguments are whitespace-split. Returns None for an unknown
    /// keyword or the wrong number of arguments.
    pub fn parse(line: &str) -> Option<Command> {
        let mut parts = line.split_whitespace();
        let keyword = parts.next()?.to_uppercase();
        let args: Vec<&str> = parts.collect();

        match (keyword.as_str(), args.as_slice()) {
            ("NUMBER_OF_VIDEOS", []) => Some(Command::NumberOfVideos),
            ("SHOW_ALL_VIDEOS", []) => Some(Command::ShowAllVideos),
            ("PLAY", [id]) => Some(Command::Play {
                video_id: id.to_string(),
            }),
            ("PLAY_RANDOM", []) => Some(Command::PlayRandom),
            ("STOP", []) => Some(Command::Stop),
            ("PAUSE", []) => Some(Command::Pause),
            ("CONTINUE", []) => Some(Command::Continue),
            ("SHOW_PLAYING", []) => Some(Command::ShowPlaying),
            ("CREATE_PLAYLIST", [name]) => Some(Command::CreatePlaylist {
                name: name.to_string(),
            }),
            ("ADD_TO_PLAYLIST", [name, id]) => Some(Command::AddToPlaylist {
                name: name.to_string(),
                video_id: id.to_string(),
            }),
            ("REMOVE_FROM_PLAYLIST", [name, id]) => Some(Command::RemoveFromPlaylist {
                name: name.to_string(),
                video_id: id.to_string(),
            }),
            ("CLEAR_PLAYLIST", [name]) => Some(Command::ClearPlaylist {
                name: name.to_string(),
            }),
            ("DELETE_PLAYLIST", [name]) => Some(Command::DeletePlaylist {
                name: name.to_string(),
            }),
            ("SHOW_PLAYLIST", [name]) => Some(Command::ShowPlaylist {
                name: name.to_string(),
            }),
            ("SHOW_ALL_PLAYLISTS", []) => Some(Command::ShowAllPlaylists),
            ("SEARCH_VIDEOS", [term]) => Some(Command::SearchVideos {
                term: term.to_string(),
            }),
            ("SEARCH_VIDEOS_WITH_TAG", [tag]) => Some(Command::SearchVideosWithTag {
                tag: tag.to_string(),
            }),
            // The flag reason is everything after the id, and may be empty
            ("FLAG_VIDEO", [id, reason @ ..]) => Some(Command::FlagVideo {
                video_id: id.to_string(),
                reason: reason.join(" "),
            }),
            ("ALLOW_VIDEO", [id]) => Some(Command::AllowVideo {
                video_id: id.to_string(),
            }),
            ("HELP", []) => Some(Command::Help),
            ("EXIT", []) => Some(Command::Exit),
            _ => None,
        }
    }
}
