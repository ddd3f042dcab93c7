//! Ratio example: common ticks, custom units, and checked arithmetic.

use scaled::{ratio, typenum, Common, Quantity, QuantityError, Unit};

/// Film frames.
#[derive(Clone, Copy, Debug, Unit)]
#[unit(symbol = "fr", ratio = 1 / 24)]
pub struct Frame;

type Ntsc = ratio!(1001 / 30_000);

fn main() {
    type Tick = Common<Frame, Ntsc>;
    println!("common tick of 1/24 and 1001/30000: {}/{}", Tick::NUM, Tick::DEN);
    assert_eq!((Tick::NUM, Tick::DEN), (1, 30_000));

    let film = Quantity::<i64, Frame>::new(24);
    let video = Quantity::<i64, Ntsc>::new(24);
    let drift = film - video;
    println!("{film} - {video} = {drift}");
    assert_eq!(drift.value(), 24 * 1_250 - 24 * 1_001);

    let minutes = Quantity::<i16, ratio!(60)>::new(1_000);
    match minutes.checked_add(Quantity::<i16>::new(1)) {
        Ok(sum) => println!("sum: {sum}"),
        Err(QuantityError::RescaleOverflow { factor }) => println!("rescaling by {factor} does not fit in i16"),
        Err(err) => println!("error: {err}"),
    }
}
