/// Bold, italic, underline and crossline delimiters.
///
/// Bold and italic share `*`, so bold (`**`) is always tried first at a
/// given position and italic refuses an empty body, which keeps `**` from
/// being read as an empty italic span.
pub struct Emphasis;

impl Emphasis {
    pub const STAR: u8 = b'*';
    pub const BOLD: &'static [u8] = b"**";
    pub const UNDERLINE: &'static [u8] = b"__";
    pub const CROSSLINE: &'static [u8] = b"~~";
}
