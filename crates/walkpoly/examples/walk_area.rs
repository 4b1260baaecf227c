//! Resolve click targets against an L-shaped walk area.
//!
//! Usage:
//!   cargo run -p walkpoly --example walk_area
//!
//! For each click prints where the player would walk to and whether a direct
//! line from the current position is possible.

use walkpoly::prelude::*;

fn main() -> Result<(), PolygonError> {
    let area = Polygon::new(vec![
        Vec2::new(0.0, 0.0),
        Vec2::new(10.0, 0.0),
        Vec2::new(10.0, 10.0),
        Vec2::new(5.0, 10.0),
        Vec2::new(5.0, 5.0),
        Vec2::new(0.0, 5.0),
    ])?;
    println!("concave corners: {:?}", area.concave_vertices());

    let player = Vec2::new(1.0, 1.0);
    let clicks = [
        Vec2::new(4.0, 4.0),
        Vec2::new(8.0, 9.0),
        Vec2::new(2.0, 9.0),
        Vec2::new(-3.0, 2.0),
    ];
    for click in clicks {
        let target = if area.is_point_inside(click) {
            click
        } else {
            area.closest_point_to(click)
        };
        let direct = area.points_can_see_each_other(player, target);
        println!(
            "click ({:.1}, {:.1}) -> target ({:.2}, {:.2}), direct line: {direct}",
            click.x, click.y, target.x, target.y
        );
    }
    Ok(())
}
