//! Robot command schema: a variant whose alternatives include a sequence of
//! further commands, so dispatch recurses through nested variants.

use wireview::buffer::LittleEndian;
use wireview::types::{EnumCodec, LeI16, ListCodec, ListView, U8};
use wireview::variant::{parse_tag, render_tag};
use wireview::wire_enum;
use wireview::{Codec, CodecExt, Error, FixedSize, ParseInfo, ParseResult, WireEnum};

wire_enum! {
    pub enum Direction: u8 {
        FORWARDS = 0,
        BACKWARDS = 1,
    }
}

wire_enum! {
    pub enum RotateDirection: u8 {
        LEFT_90 = 0,
        RIGHT_90 = 1,
    }
}

wire_enum! {
    pub enum CmdTag: u8 {
        MOVE = 0,
        ROTATE = 1,
        SEQ = 2,
    }
}

pub type DirectionField = EnumCodec<Direction, LittleEndian>;
pub type RotateDirectionField = EnumCodec<RotateDirection, LittleEndian>;
pub type CmdTagField = EnumCodec<CmdTag, LittleEndian>;

// =====================================================
// MoveCmd

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveCmd {
    pub direction: Direction,
    pub distance: i16,
}

#[derive(Debug, Clone, Copy)]
pub struct MoveCmdView<'a> {
    buf: &'a [u8],
}

impl<'a> MoveCmdView<'a> {
    pub fn direction(&self) -> Direction {
        DirectionField::render(self.buf)
    }

    pub fn distance(&self) -> i16 {
        LeI16::render(&self.buf[1..])
    }
}

impl Codec for MoveCmd {
    type Rendered<'a> = MoveCmdView<'a>;
    type Built = MoveCmd;
    type Cfg = ();

    fn parse_cfg(buf: &[u8], _: ()) -> ParseResult<'_, Self> {
        let tail = DirectionField::parse(buf)?.tail;
        let tail = LeI16::parse(tail)?.tail;
        Ok(ParseInfo::new(MoveCmdView { buf }, tail))
    }

    fn render_cfg(buf: &[u8], _: ()) -> MoveCmdView<'_> {
        MoveCmdView { buf }
    }

    fn build(rendered: &MoveCmdView<'_>) -> MoveCmd {
        MoveCmd {
            direction: rendered.direction(),
            distance: rendered.distance(),
        }
    }

    fn serialize_into<'b>(built: &MoveCmd, out: &'b mut [u8]) -> &'b mut [u8] {
        let out = DirectionField::serialize_into(&built.direction, out);
        LeI16::serialize_into(&built.distance, out)
    }

    fn size_bytes(_: &MoveCmd) -> usize {
        Self::SIZE_BYTES
    }
}

impl FixedSize for MoveCmd {
    const SIZE_BYTES: usize = 3;
}

// =====================================================
// RotateCmd

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotateCmd {
    pub direction: RotateDirection,
}

#[derive(Debug, Clone, Copy)]
pub struct RotateCmdView<'a> {
    buf: &'a [u8],
}

impl<'a> RotateCmdView<'a> {
    pub fn direction(&self) -> RotateDirection {
        RotateDirectionField::render(self.buf)
    }
}

impl Codec for RotateCmd {
    type Rendered<'a> = RotateCmdView<'a>;
    type Built = RotateCmd;
    type Cfg = ();

    fn parse_cfg(buf: &[u8], _: ()) -> ParseResult<'_, Self> {
        let tail = RotateDirectionField::parse(buf)?.tail;
        Ok(ParseInfo::new(RotateCmdView { buf }, tail))
    }

    fn render_cfg(buf: &[u8], _: ()) -> RotateCmdView<'_> {
        RotateCmdView { buf }
    }

    fn build(rendered: &RotateCmdView<'_>) -> RotateCmd {
        RotateCmd {
            direction: rendered.direction(),
        }
    }

    fn serialize_into<'b>(built: &RotateCmd, out: &'b mut [u8]) -> &'b mut [u8] {
        RotateDirectionField::serialize_into(&built.direction, out)
    }

    fn size_bytes(_: &RotateCmd) -> usize {
        Self::SIZE_BYTES
    }
}

impl FixedSize for RotateCmd {
    const SIZE_BYTES: usize = 1;
}

// =====================================================
// CmdSeq: a count-prefixed list of commands. Commands vary in size, so the
// list parse materializes sub-views.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdSeq {
    pub cmds: Vec<Cmd>,
}

#[derive(Debug, Clone, Copy)]
pub struct CmdSeqView<'a> {
    buf: &'a [u8],
}

impl<'a> CmdSeqView<'a> {
    pub fn length(&self) -> u8 {
        U8::render(self.buf)
    }

    pub fn cmds(&self) -> ListView<'a, Cmd> {
        ListCodec::<Cmd>::render_cfg(&self.buf[1..], self.length() as usize)
    }
}

impl Codec for CmdSeq {
    type Rendered<'a> = CmdSeqView<'a>;
    type Built = CmdSeq;
    type Cfg = ();

    fn parse_cfg(buf: &[u8], _: ()) -> ParseResult<'_, Self> {
        let (length, tail) = U8::parse(buf)?.into_parts();
        let tail = ListCodec::<Cmd>::parse_cfg(tail, length as usize)?.tail;
        Ok(ParseInfo::new(CmdSeqView { buf }, tail))
    }

    fn render_cfg(buf: &[u8], _: ()) -> CmdSeqView<'_> {
        CmdSeqView { buf }
    }

    fn build(rendered: &CmdSeqView<'_>) -> CmdSeq {
        CmdSeq {
            cmds: ListCodec::<Cmd>::build(&rendered.cmds()),
        }
    }

    fn serialize_into<'b>(built: &CmdSeq, out: &'b mut [u8]) -> &'b mut [u8] {
        let out = U8::serialize_into(&(built.cmds.len() as u8), out);
        ListCodec::<Cmd>::serialize_into(&built.cmds, out)
    }

    fn size_bytes(built: &CmdSeq) -> usize {
        1 + ListCodec::<Cmd>::size_bytes(&built.cmds)
    }
}

// =====================================================
// Cmd: the command union; Seq nests further commands.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    Move(MoveCmd),
    Rotate(RotateCmd),
    Seq(CmdSeq),
}

impl Cmd {
    pub fn tag(&self) -> CmdTag {
        match self {
            Cmd::Move(_) => CmdTag::MOVE,
            Cmd::Rotate(_) => CmdTag::ROTATE,
            Cmd::Seq(_) => CmdTag::SEQ,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum CmdView<'a> {
    Move(MoveCmdView<'a>),
    Rotate(RotateCmdView<'a>),
    Seq(CmdSeqView<'a>),
}

impl Codec for Cmd {
    type Rendered<'a> = CmdView<'a>;
    type Built = Cmd;
    type Cfg = ();

    fn parse_cfg(buf: &[u8], _: ()) -> ParseResult<'_, Self> {
        let (tag, payload) = parse_tag::<CmdTag, LittleEndian>(buf)?;
        match tag.value() {
            0 => {
                let (view, tail) = MoveCmd::parse(payload)?.into_parts();
                Ok(ParseInfo::new(CmdView::Move(view), tail))
            }
            1 => {
                let (view, tail) = RotateCmd::parse(payload)?.into_parts();
                Ok(ParseInfo::new(CmdView::Rotate(view), tail))
            }
            2 => {
                let (view, tail) = CmdSeq::parse(payload)?.into_parts();
                Ok(ParseInfo::new(CmdView::Seq(view), tail))
            }
            _ => Err(Error::Malformed),
        }
    }

    fn render_cfg(buf: &[u8], _: ()) -> CmdView<'_> {
        let (tag, payload) = render_tag::<CmdTag, LittleEndian>(buf);
        match tag.value() {
            0 => CmdView::Move(MoveCmd::render(payload)),
            1 => CmdView::Rotate(RotateCmd::render(payload)),
            2 => CmdView::Seq(CmdSeq::render(payload)),
            raw => panic!("render over unvalidated bytes: unknown tag {raw}"),
        }
    }

    fn build(rendered: &CmdView<'_>) -> Cmd {
        match rendered {
            CmdView::Move(view) => Cmd::Move(MoveCmd::build(view)),
            CmdView::Rotate(view) => Cmd::Rotate(RotateCmd::build(view)),
            CmdView::Seq(view) => Cmd::Seq(CmdSeq::build(view)),
        }
    }

    fn serialize_into<'b>(built: &Cmd, out: &'b mut [u8]) -> &'b mut [u8] {
        let out = CmdTagField::serialize_into(&built.tag(), out);
        match built {
            Cmd::Move(cmd) => MoveCmd::serialize_into(cmd, out),
            Cmd::Rotate(cmd) => RotateCmd::serialize_into(cmd, out),
            Cmd::Seq(cmd) => CmdSeq::serialize_into(cmd, out),
        }
    }

    fn size_bytes(built: &Cmd) -> usize {
        1 + match built {
            Cmd::Move(cmd) => MoveCmd::size_bytes(cmd),
            Cmd::Rotate(cmd) => RotateCmd::size_bytes(cmd),
            Cmd::Seq(cmd) => CmdSeq::size_bytes(cmd),
        }
    }
}

// =====================================================
// Msg: the top-level command carrier.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Msg {
    pub cmd: Cmd,
}

#[derive(Debug, Clone, Copy)]
pub struct MsgView<'a> {
    buf: &'a [u8],
}

impl<'a> MsgView<'a> {
    pub fn cmd(&self) -> CmdView<'a> {
        Cmd::render(self.buf)
    }
}

impl Codec for Msg {
    type Rendered<'a> = MsgView<'a>;
    type Built = Msg;
    type Cfg = ();

    fn parse_cfg(buf: &[u8], _: ()) -> ParseResult<'_, Self> {
        let tail = Cmd::parse(buf)?.tail;
        Ok(ParseInfo::new(MsgView { buf }, tail))
    }

    fn render_cfg(buf: &[u8], _: ()) -> MsgView<'_> {
        MsgView { buf }
    }

    fn build(rendered: &MsgView<'_>) -> Msg {
        Msg {
            cmd: Cmd::build(&rendered.cmd()),
        }
    }

    fn serialize_into<'b>(built: &Msg, out: &'b mut [u8]) -> &'b mut [u8] {
        Cmd::serialize_into(&built.cmd, out)
    }

    fn size_bytes(built: &Msg) -> usize {
        Cmd::size_bytes(&built.cmd)
    }
}

// =====================================================
// A toy robot driven by parsed command streams.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attitude {
    pub dx: i32,
    pub dy: i32,
}

/// Starts at the origin facing positive y.
pub struct Robot {
    x: i32,
    y: i32,
    dx: i32,
    dy: i32,
}

impl Robot {
    pub fn new() -> Self {
        Self {
            x: 0,
            y: 0,
            dx: 0,
            dy: 1,
        }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn attitude(&self) -> Attitude {
        Attitude {
            dx: self.dx,
            dy: self.dy,
        }
    }

    pub fn advance(&mut self, direction: Direction, mut distance: i32) {
        if direction == Direction::BACKWARDS {
            distance = -distance;
        }
        self.x += self.dx * distance;
        self.y += self.dy * distance;
    }

    pub fn rotate(&mut self, direction: RotateDirection) {
        // Left rotation of the unit heading; right is three lefts.
        let turns = if direction == RotateDirection::LEFT_90 { 1 } else { 3 };
        for _ in 0..turns {
            let (dx, dy) = (-self.dy, self.dx);
            self.dx = dx;
            self.dy = dy;
        }
    }
}

impl Default for Robot {
    fn default() -> Self {
        Self::new()
    }
}

fn apply(cmd: &CmdView<'_>, robot: &mut Robot) {
    match cmd {
        CmdView::Move(cmd) => robot.advance(cmd.direction(), cmd.distance() as i32),
        CmdView::Rotate(cmd) => robot.rotate(cmd.direction()),
        CmdView::Seq(seq) => {
            for inner in seq.cmds().iter() {
                apply(inner, robot);
            }
        }
    }
}

/// Parses a command message and drives `robot` with it. Returns whether the
/// bytes parsed.
pub fn control_robot(buf: &[u8], robot: &mut Robot) -> bool {
    let Ok(info) = Msg::parse(buf) else {
        return false;
    };
    apply(&info.rendered.cmd(), robot);
    true
}
