use std::io::{self, Write};

use life_core::{CellCoord, Grid, GridSize};
use life_rendering::{Frame, Glyphs, RenderingBackend};
use life_rendering_terminal::TerminalBackend;

#[test]
fn frames_are_written_back_to_back() {
    let size = GridSize::new(5, 5);
    let row = Grid::with_alive_cells(
        size,
        [CellCoord::new(1, 2), CellCoord::new(2, 2), CellCoord::new(3, 2)],
    );
    let mut backend = TerminalBackend::new(Vec::new(), Glyphs::default());

    backend
        .present(&Frame::new(0, row.view()))
        .expect("in-memory writes succeed");
    backend
        .present(&Frame::new(1, Grid::new(size).view()))
        .expect("in-memory writes succeed");

    assert_eq!(backend.frames_presented(), 2);
    let text = String::from_utf8(backend.into_inner()).expect("utf-8 output");
    assert_eq!(
        text,
        "\n\n.....\n.....\n.%%%.\n.....\n.....\n\n\n.....\n.....\n.....\n.....\n.....\n"
    );
}

#[test]
fn present_text_is_written_verbatim() {
    let mut backend = TerminalBackend::new(Vec::new(), Glyphs::default());
    backend
        .present_text("hello\n")
        .expect("in-memory writes succeed");
    assert_eq!(backend.frames_presented(), 0);
    assert_eq!(backend.into_inner(), b"hello\n".to_vec());
}

struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn write_failures_surface_as_errors() {
    let grid = Grid::new(GridSize::new(2, 2));
    let mut backend = TerminalBackend::new(BrokenPipe, Glyphs::default());

    let error = backend
        .present(&Frame::new(7, grid.view()))
        .expect_err("broken pipe must fail");

    assert!(error.to_string().contains("generation 7"), "{error:#}");
    assert_eq!(backend.frames_presented(), 0);
}

/// Records how many bytes were written at each flush.
#[derive(Default)]
struct FlushLog {
    written: usize,
    flushed_at: Vec<usize>,
}

impl Write for FlushLog {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.written += buf.len();
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flushed_at.push(self.written);
        Ok(())
    }
}

#[test]
fn every_frame_is_flushed_once_fully_written() {
    let grid = Grid::new(GridSize::new(3, 2));
    let mut backend = TerminalBackend::new(FlushLog::default(), Glyphs::default());

    for generation in 0..3 {
        backend
            .present(&Frame::new(generation, grid.view()))
            .expect("in-memory writes succeed");
    }

    // Separator plus two rows of three cells and a newline.
    let frame_len = 2 + 2 * 4;
    let log = backend.into_inner();
    assert_eq!(log.written, 3 * frame_len);
    assert_eq!(log.flushed_at, vec![frame_len, 2 * frame_len, 3 * frame_len]);
}

struct StuckFlush;

impl Write for StuckFlush {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::Other, "stuck"))
    }
}

#[test]
fn flush_failures_surface_as_errors() {
    let grid = Grid::new(GridSize::new(2, 2));
    let mut backend = TerminalBackend::new(StuckFlush, Glyphs::default());

    let error = backend
        .present(&Frame::new(0, grid.view()))
        .expect_err("failed flush must fail");

    assert!(error.to_string().contains("flush"), "{error:#}");
    assert_eq!(backend.frames_presented(), 0);
}
