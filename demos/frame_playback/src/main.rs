use flo_frame_sequence::*;
use flo_frame_sequence::description::*;

use log::{info};

use std::sync::*;
use std::path::{Path};
use std::time::{Duration, Instant};

const WALK_CYCLE: &str = r#"{
    "frames": { "PerFrame": [
        { "image": "walk-a.png", "duration": 0.12 },
        { "image": "walk-b.png", "duration": 0.08 },
        { "image": "walk-c.png", "duration": 0.12 },
        { "image": "walk-d.png", "duration": 0.08 }
    ] },
    "playback": { "looping": false }
}"#;

///
/// A 'sprite' made out of a single character
///
struct GlyphImage(char);

///
/// Makes a glyph for each image using the last character of the file stem
///
struct GlyphProvider;

impl ImageProvider for GlyphProvider {
    type Image = GlyphImage;

    fn load_image(&mut self, path: &Path) -> Result<Arc<GlyphImage>, SequenceError> {
        let glyph = path.file_stem()
            .and_then(|stem| stem.to_str())
            .and_then(|stem| stem.chars().last());

        match glyph {
            Some(glyph) => Ok(Arc::new(GlyphImage(glyph))),
            None        => Err(SequenceError::ImageNotAvailable(path.to_path_buf(), "no file name".to_string()))
        }
    }
}

///
/// A single line of text that glyphs can be drawn on to
///
struct TextLine(Vec<char>);

impl BlitTarget<GlyphImage> for TextLine {
    fn size(&self) -> (u32, u32) { (self.0.len() as u32, 1) }

    fn blit(&mut self, image: &Arc<GlyphImage>, BlitPosition(x, _y): BlitPosition) {
        // Anything off the edge of the line is clipped
        if x >= 0 && (x as usize) < self.0.len() {
            self.0[x as usize] = image.0;
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let description     = SequenceDescription::from_json(WALK_CYCLE)?;
    let mut walker      = AnimationSequence::from_description(&description, &mut GlyphProvider)?;
    let mut runner      = walker.get_copy();
    let start           = Instant::now();

    info!("Loaded {} frames ({}s in total)", walker.frame_count(), seconds_from_duration(walker.total_duration()));

    // The runner is a copy of the walker that loops at double speed in reverse
    runner.set_looping(true, start);
    runner.set_rate(2.0, start);
    runner.reverse(start);

    walker.play(start);
    runner.play(start);

    for tick in 0..24 {
        let now         = start + Duration::from_millis(tick * 25);
        let mut line    = TextLine(vec!['.'; 8]);

        walker.draw_current_frame(&mut line, BlitPosition(1, 0), now)?;
        runner.draw_current_frame(&mut line, BlitPosition(6, 0), now)?;

        let line: String = line.0.iter().collect();
        println!("{:>4}ms  {}  {}", tick * 25, line, if walker.is_finished(now) { "(finished)" } else { "" });
    }

    Ok(())
}
