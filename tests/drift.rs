// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use approx::assert_relative_eq;
use drift_delaunay::operations::triangulation::validate;
use drift_delaunay::sampling::drift::{MAX_SPEED, SPAWN_HALF_EXTENT};
use drift_delaunay::sampling::{DriftBounds, DriftingCloud};
use drift_delaunay::{Point2, Vector2};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn test_random_cloud_ranges() {
    let mut rng = StdRng::seed_from_u64(1);
    let cloud = DriftingCloud::random(100, &mut rng);
    assert_eq!(cloud.len(), 100);
    assert_eq!(cloud.velocities().len(), 100);
    assert_eq!(cloud.bounds(), DriftBounds::default());
    for p in cloud.points() {
        assert!(p.x >= -SPAWN_HALF_EXTENT && p.x < SPAWN_HALF_EXTENT);
        assert!(p.y >= -SPAWN_HALF_EXTENT && p.y < SPAWN_HALF_EXTENT);
    }
    for v in cloud.velocities() {
        assert!(v.x >= -MAX_SPEED && v.x < MAX_SPEED);
        assert!(v.y >= -MAX_SPEED && v.y < MAX_SPEED);
    }
}

#[test]
fn test_same_seed_same_cloud() {
    let a = DriftingCloud::random(20, &mut StdRng::seed_from_u64(9));
    let b = DriftingCloud::random(20, &mut StdRng::seed_from_u64(9));
    assert_eq!(a.points(), b.points());
    assert_eq!(a.velocities(), b.velocities());
}

#[test]
fn test_step_moves_by_velocity() {
    let mut cloud = DriftingCloud::from_parts(
        vec![(Point2::new(1.0, 2.0), Vector2::new(0.125, -0.0625))],
        DriftBounds::default(),
    );
    cloud.step();
    assert_relative_eq!(cloud.points()[0].x, 1.125);
    assert_relative_eq!(cloud.points()[0].y, 1.9375);
    assert_eq!(cloud.velocities()[0], Vector2::new(0.125, -0.0625));
}

#[test]
fn test_step_bounces_off_bounds() {
    let mut cloud = DriftingCloud::from_parts(
        vec![
            (Point2::new(99.95, 0.0), Vector2::new(0.1, 0.0)),
            (Point2::new(0.0, -49.95), Vector2::new(0.0, -0.1)),
        ],
        DriftBounds::default(),
    );
    cloud.step();
    assert_eq!(cloud.velocities()[0], Vector2::new(-0.1, 0.0));
    assert_eq!(cloud.velocities()[1], Vector2::new(0.0, 0.1));

    cloud.step();
    assert!(cloud.points()[0].x < 100.1);
    assert!(cloud.points()[1].y > -50.1);
}

#[test]
fn test_custom_bounds() {
    let bounds = DriftBounds {
        half_width: 1.0,
        half_height: 1.0,
    };
    let mut cloud =
        DriftingCloud::from_parts(vec![(Point2::new(0.95, 0.0), Vector2::new(0.1, 0.0))], bounds);
    cloud.step();
    assert_eq!(cloud.velocities()[0].x, -0.1);
}

#[test]
fn test_frames_stay_delaunay() {
    let mut rng = StdRng::seed_from_u64(77);
    let mut cloud = DriftingCloud::random(60, &mut rng);
    for frame in 0..10 {
        if frame == 5 {
            assert_eq!(cloud.push_random(&mut rng), 60);
        }
        cloud.step();
        let tri = cloud.triangulate().unwrap();
        let report = validate(cloud.points(), &tri).unwrap();
        assert!(
            report.is_delaunay(),
            "frame {frame}: {:?}",
            report.violations
        );
    }
    assert_eq!(cloud.len(), 61);
}
