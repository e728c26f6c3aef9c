use crate::components::Star;

pub fn twinkle_stars(stars: &mut [Star], tick: u64) {
    for star in stars {
        star.twinkle(tick);
    }
}
