//! aria2 exit status codes, as reported in `errorCode`.

use std::fmt;

/// The code of the last error for a download.
///
/// Mirrors the exit status table in the aria2 manual. Codes this client does
/// not know are kept in [`ExitStatus::Unknown`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ExitStatus {
    /// All downloads were successful.
    #[default]
    Success,
    UnknownError,
    Timeout,
    ResourceNotFound,
    /// aria2 saw the configured number of "resource not found" errors.
    MaxFileNotFound,
    /// Aborted because download speed was too slow (`--lowest-speed-limit`).
    TooSlowDownloadSpeed,
    NetworkProblem,
    /// There were unfinished downloads at shutdown.
    InProgress,
    /// The remote server did not support resume when it was required.
    RemoteNoResume,
    NotEnoughDiskSpace,
    /// Piece length differed from the one in the `.aria2` control file.
    PieceLengthChanged,
    /// The same file was being downloaded at that moment.
    DuplicateDownload,
    /// The same info hash torrent was being downloaded at that moment.
    DuplicateInfoHash,
    FileAlreadyExists,
    FileRenamingFailed,
    FileOpenError,
    FileCreateError,
    FileIoError,
    DirCreateError,
    NameResolveError,
    MetalinkParseError,
    FtpProtocolError,
    HttpProtocolError,
    HttpTooManyRedirects,
    HttpAuthFailed,
    BencodeParseError,
    /// The `.torrent` file was corrupted or missing information.
    BittorrentParseError,
    MagnetParseError,
    /// A bad or unrecognized option was given.
    OptionError,
    /// The remote server was unable to handle the request (overload or maintenance).
    HttpServiceUnavailable,
    JsonParseError,
    /// Reserved by aria2.
    Removed,
    ChecksumError,
    /// A code outside the known table.
    Unknown(u32),
}

impl ExitStatus {
    /// Map a numeric code to its variant.
    #[must_use]
    pub const fn from_code(code: u32) -> Self {
        match code {
            0 => Self::Success,
            1 => Self::UnknownError,
            2 => Self::Timeout,
            3 => Self::ResourceNotFound,
            4 => Self::MaxFileNotFound,
            5 => Self::TooSlowDownloadSpeed,
            6 => Self::NetworkProblem,
            7 => Self::InProgress,
            8 => Self::RemoteNoResume,
            9 => Self::NotEnoughDiskSpace,
            10 => Self::PieceLengthChanged,
            11 => Self::DuplicateDownload,
            12 => Self::DuplicateInfoHash,
            13 => Self::FileAlreadyExists,
            14 => Self::FileRenamingFailed,
            15 => Self::FileOpenError,
            16 => Self::FileCreateError,
            17 => Self::FileIoError,
            18 => Self::DirCreateError,
            19 => Self::NameResolveError,
            20 => Self::MetalinkParseError,
            21 => Self::FtpProtocolError,
            22 => Self::HttpProtocolError,
            23 => Self::HttpTooManyRedirects,
            24 => Self::HttpAuthFailed,
            25 => Self::BencodeParseError,
            26 => Self::BittorrentParseError,
            27 => Self::MagnetParseError,
            28 => Self::OptionError,
            29 => Self::HttpServiceUnavailable,
            30 => Self::JsonParseError,
            31 => Self::Removed,
            32 => Self::ChecksumError,
            other => Self::Unknown(other),
        }
    }

    /// The numeric code.
    #[must_use]
    pub const fn code(&self) -> u32 {
        match self {
            Self::Success => 0,
            Self::UnknownError => 1,
            Self::Timeout => 2,
            Self::ResourceNotFound => 3,
            Self::MaxFileNotFound => 4,
            Self::TooSlowDownloadSpeed => 5,
            Self::NetworkProblem => 6,
            Self::InProgress => 7,
            Self::RemoteNoResume => 8,
            Self::NotEnoughDiskSpace => 9,
            Self::PieceLengthChanged => 10,
            Self::DuplicateDownload => 11,
            Self::DuplicateInfoHash => 12,
            Self::FileAlreadyExists => 13,
            Self::FileRenamingFailed => 14,
            Self::FileOpenError => 15,
            Self::FileCreateError => 16,
            Self::FileIoError => 17,
            Self::DirCreateError => 18,
            Self::NameResolveError => 19,
            Self::MetalinkParseError => 20,
            Self::FtpProtocolError => 21,
            Self::HttpProtocolError => 22,
            Self::HttpTooManyRedirects => 23,
            Self::HttpAuthFailed => 24,
            Self::BencodeParseError => 25,
            Self::BittorrentParseError => 26,
            Self::MagnetParseError => 27,
            Self::OptionError => 28,
            Self::HttpServiceUnavailable => 29,
            Self::JsonParseError => 30,
            Self::Removed => 31,
            Self::ChecksumError => 32,
            Self::Unknown(code) => *code,
        }
    }

    /// Returns true for code 0.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Short human-readable description.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::UnknownError => "unknown error",
            Self::Timeout => "timeout",
            Self::ResourceNotFound => "resource not found",
            Self::MaxFileNotFound => "too many resource-not-found errors",
            Self::TooSlowDownloadSpeed => "download speed too slow",
            Self::NetworkProblem => "network problem",
            Self::InProgress => "unfinished downloads",
            Self::RemoteNoResume => "remote server does not support resume",
            Self::NotEnoughDiskSpace => "not enough disk space",
            Self::PieceLengthChanged => "piece length differs from control file",
            Self::DuplicateDownload => "same file is already being downloaded",
            Self::DuplicateInfoHash => "same info hash is already being downloaded",
            Self::FileAlreadyExists => "file already exists",
            Self::FileRenamingFailed => "renaming file failed",
            Self::FileOpenError => "could not open existing file",
            Self::FileCreateError => "could not create or truncate file",
            Self::FileIoError => "file I/O error",
            Self::DirCreateError => "could not create directory",
            Self::NameResolveError => "name resolution failed",
            Self::MetalinkParseError => "could not parse Metalink document",
            Self::FtpProtocolError => "FTP command failed",
            Self::HttpProtocolError => "bad or unexpected HTTP response header",
            Self::HttpTooManyRedirects => "too many redirects",
            Self::HttpAuthFailed => "HTTP authorization failed",
            Self::BencodeParseError => "could not parse bencoded file",
            Self::BittorrentParseError => "torrent file is corrupted or incomplete",
            Self::MagnetParseError => "bad magnet URI",
            Self::OptionError => "bad or unrecognized option",
            Self::HttpServiceUnavailable => "remote server overloaded or in maintenance",
            Self::JsonParseError => "could not parse JSON-RPC request",
            Self::Removed => "removed",
            Self::ChecksumError => "checksum validation failed",
            Self::Unknown(_) => "unrecognized error code",
        }
    }
}

impl From<u32> for ExitStatus {
    fn from(code: u32) -> Self {
        Self::from_code(code)
    }
}

impl fmt::Display for ExitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.code(), self.description())
    }
}
