//! End-to-end tests of the rasterization pipeline
//!
//! The test camera has a focal length of 10 px on both axes and its optical
//! center in the middle of an 11x11 grid, so a world point `(x, y, z)` lands on
//! column `10x/z + 5` and row `-10y/z + 5`.

use super::camera::compute_calibration;
use super::glyph::BLANK;
use super::*;
use crate::config::RendererConfig;
use crate::foundation::math::{constants::PI, Coordinate2D, Rotation3D, Vec3};
use crate::geometry;
use approx::assert_relative_eq;

const FAST_FPS: f64 = 1000.0;
const CENTER: (usize, usize) = (5, 5);

fn test_renderer() -> Renderer<Vec<u8>> {
    let calibration = compute_calibration(
        1.0,
        1.0,
        0.01,
        Coordinate2D::new(5.0, 5.0),
        Vec3::zeros(),
        Rotation3D::default(),
    );
    Renderer::new(&calibration, 11, 11, FAST_FPS, Vec::new()).expect("valid renderer")
}

fn single_point(point: Vec3, normal: Vec3) -> Object {
    Object::new(vec![point], vec![normal]).expect("one point, one normal")
}

fn at_origin(object: &Object) -> ObjectPlacement<'_> {
    ObjectPlacement::new(object, Vec3::zeros(), Rotation3D::default())
}

fn light_at_origin() -> PointLight {
    PointLight::new(Vec3::zeros())
}

fn assert_untouched(renderer: &Renderer<Vec<u8>>) {
    assert!(renderer.frame_buffer().iter().all(|&glyph| glyph == BLANK));
    assert!(renderer.depth_buffer().iter().all(|depth| depth.is_infinite()));
}

#[test]
fn test_nearest_point_wins_in_either_order() {
    // Facing the light gives the brightest glyph, facing away the darkest
    let near = single_point(Vec3::new(0.0, 0.0, 1.0), Vec3::new(0.0, 0.0, -1.0));
    let far = single_point(Vec3::new(0.0, 0.0, 2.0), Vec3::new(0.0, 0.0, 1.0));

    let mut renderer = test_renderer();

    let stats = renderer.rasterize(&light_at_origin(), &[at_origin(&near), at_origin(&far)]);
    assert_eq!(renderer.frame_buffer()[CENTER], '@');
    assert_relative_eq!(renderer.depth_buffer()[CENTER], 1.0);
    assert_eq!((stats.drawn, stats.occluded), (1, 1));

    let stats = renderer.rasterize(&light_at_origin(), &[at_origin(&far), at_origin(&near)]);
    assert_eq!(renderer.frame_buffer()[CENTER], '@');
    assert_relative_eq!(renderer.depth_buffer()[CENTER], 1.0);
    assert_eq!((stats.drawn, stats.occluded), (2, 0));
}

#[test]
fn test_first_point_wins_on_equal_depth() {
    let bright = single_point(Vec3::new(0.0, 0.0, 1.0), Vec3::new(0.0, 0.0, -1.0));
    let dark = single_point(Vec3::new(0.0, 0.0, 1.0), Vec3::new(0.0, 0.0, 1.0));
    let mut renderer = test_renderer();

    renderer.rasterize(&light_at_origin(), &[at_origin(&dark), at_origin(&bright)]);
    assert_eq!(renderer.frame_buffer()[CENTER], '.');

    renderer.rasterize(&light_at_origin(), &[at_origin(&bright), at_origin(&dark)]);
    assert_eq!(renderer.frame_buffer()[CENTER], '@');
}

#[test]
fn test_points_outside_the_grid_are_discarded() {
    let object = Object::new(
        vec![
            Vec3::new(10.0, 0.0, 1.0),
            Vec3::new(-0.6, 0.0, 1.0),
            Vec3::new(0.0, 0.6, 1.0),
            Vec3::new(0.0, -0.6, 1.0),
            // Half a cell past the last column and row rounds outward
            Vec3::new(0.55, 0.0, 1.0),
            Vec3::new(0.0, -0.55, 1.0),
        ],
        vec![Vec3::z(); 6],
    )
    .expect("matching lengths");
    let mut renderer = test_renderer();

    let stats = renderer.rasterize(&light_at_origin(), &[at_origin(&object)]);

    assert_eq!(stats.points, 6);
    assert_eq!(stats.out_of_bounds, 6);
    assert_eq!(stats.drawn, 0);
    assert_untouched(&renderer);
}

#[test]
fn test_points_behind_the_camera_are_discarded() {
    let object = Object::new(
        vec![Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 0.0, -1.0), Vec3::new(0.1, 0.1, -3.0)],
        vec![Vec3::z(); 3],
    )
    .expect("matching lengths");
    let mut renderer = test_renderer();

    let stats = renderer.rasterize(&light_at_origin(), &[at_origin(&object)]);

    assert_eq!(stats.behind_camera, 3);
    assert_untouched(&renderer);
}

#[test]
fn test_projection_rounds_to_nearest_cell() {
    let object = Object::new(
        vec![
            Vec3::new(0.04, 0.0, 1.0),
            Vec3::new(0.16, 0.0, 1.0),
            Vec3::new(0.54, 0.0, 1.0),
            Vec3::new(0.0, -0.54, 1.0),
        ],
        vec![Vec3::new(0.0, 0.0, -1.0); 4],
    )
    .expect("matching lengths");
    let mut renderer = test_renderer();

    let stats = renderer.rasterize(&light_at_origin(), &[at_origin(&object)]);

    assert_eq!(stats.drawn, 4);
    assert_ne!(renderer.frame_buffer()[(5, 5)], BLANK);
    assert_ne!(renderer.frame_buffer()[(5, 7)], BLANK);
    assert_ne!(renderer.frame_buffer()[(5, 10)], BLANK);
    assert_ne!(renderer.frame_buffer()[(10, 5)], BLANK);
}

#[test]
fn test_placement_rotates_then_translates() {
    // A quarter roll turns +x into +y, which is up on screen
    let object = single_point(Vec3::new(0.1, 0.0, 0.0), Vec3::new(0.0, 0.0, -1.0));
    let placement = ObjectPlacement::new(&object, Vec3::new(0.0, 0.0, 1.0), Rotation3D::new(0.0, 0.0, PI / 2.0));
    let mut renderer = test_renderer();

    let stats = renderer.rasterize(&light_at_origin(), &[placement]);

    assert_eq!(stats.drawn, 1);
    assert_ne!(renderer.frame_buffer()[(4, 5)], BLANK);
    assert_relative_eq!(renderer.depth_buffer()[(4, 5)], 1.0, epsilon = 1e-12);
}

#[test]
fn test_normals_are_rotated_with_the_object() {
    // The normal faces away from the light until the object is turned around
    let object = single_point(Vec3::zeros(), Vec3::new(0.0, 0.0, 1.0));
    let mut renderer = test_renderer();

    let unrotated = ObjectPlacement::new(&object, Vec3::new(0.0, 0.0, 1.0), Rotation3D::default());
    renderer.rasterize(&light_at_origin(), &[unrotated]);
    assert_eq!(renderer.frame_buffer()[CENTER], '.');

    let turned = ObjectPlacement::new(&object, Vec3::new(0.0, 0.0, 1.0), Rotation3D::new(0.0, PI, 0.0));
    renderer.rasterize(&light_at_origin(), &[turned]);
    assert_eq!(renderer.frame_buffer()[CENTER], '@');
}

#[test]
fn test_render_frame_writes_cursor_home_and_rows() {
    let calibration = compute_calibration(1.0, 1.0, 0.01, Coordinate2D::new(1.0, 0.0), Vec3::zeros(), Rotation3D::default());
    let mut renderer = Renderer::new(&calibration, 3, 2, FAST_FPS, Vec::new()).expect("valid renderer");

    let object = single_point(Vec3::new(0.0, 0.0, 1.0), Vec3::new(0.0, 0.0, -1.0));
    let stats = renderer
        .render_frame(&light_at_origin(), &[at_origin(&object)])
        .expect("Vec sink accepts writes");
    assert_eq!(stats.drawn, 1);

    let output = String::from_utf8(renderer.into_sink()).expect("frame is UTF-8");
    assert_eq!(output, "\x1b[H @ \n   \n");
}

#[test]
fn test_each_frame_starts_from_blank_buffers() {
    let object = single_point(Vec3::new(0.0, 0.0, 1.0), Vec3::new(0.0, 0.0, -1.0));
    let mut renderer = test_renderer();

    renderer.rasterize(&light_at_origin(), &[at_origin(&object)]);
    assert_ne!(renderer.frame_buffer()[CENTER], BLANK);

    let stats = renderer.rasterize(&light_at_origin(), &[]);
    assert_eq!(stats, FrameStats::default());
    assert_untouched(&renderer);
}

#[test]
fn test_identical_inputs_render_identical_frames() {
    let config = RendererConfig::default().with_target_fps(FAST_FPS);
    let mut renderer = Renderer::from_config(&config, Vec::new()).expect("default config is valid");

    let sphere = geometry::sphere(0.2, 0.05).expect("valid sphere");
    let torus = geometry::torus(0.15, 0.4, 0.05).expect("valid torus");
    let light = PointLight::new(Vec3::new(-1.0, 1.0, 1.0));
    let placements = [
        ObjectPlacement::new(&sphere, Vec3::new(1.0, 0.0, 3.0), Rotation3D::default()),
        ObjectPlacement::new(&torus, Vec3::new(0.0, 0.0, 3.0), Rotation3D::new(0.3, 0.2, 0.0)),
    ];

    let first_stats = renderer.render_frame(&light, &placements).expect("render");
    let first = renderer.frame_to_string();
    let second_stats = renderer.render_frame(&light, &placements).expect("render");
    let second = renderer.frame_to_string();

    assert_eq!(first, second);
    assert_eq!(first_stats, second_stats);
    assert!(first_stats.drawn > 0);
    assert_eq!(
        first_stats.points,
        first_stats.drawn + first_stats.occluded + first_stats.out_of_bounds + first_stats.behind_camera
    );

    let output = String::from_utf8(renderer.into_sink()).expect("frames are UTF-8");
    assert_eq!(output, format!("\x1b[H{first}\x1b[H{second}"));
}

#[test]
fn test_lit_side_of_sphere_is_brightest() {
    let config = RendererConfig::default().with_target_fps(FAST_FPS);
    let mut renderer = Renderer::from_config(&config, Vec::new()).expect("default config is valid");
    let sphere = geometry::sphere(0.2, 0.02).expect("valid sphere");

    renderer.rasterize(
        &PointLight::new(Vec3::new(-1.0, 1.0, 1.0)),
        &[ObjectPlacement::new(&sphere, Vec3::new(0.0, 0.0, 3.0), Rotation3D::default())],
    );

    let frame = renderer.frame_to_string();
    assert!(frame.contains('@'));
    assert_eq!(frame.lines().count(), 50);
    assert!(frame.lines().all(|line| line.chars().count() == 100));
}

#[test]
fn test_construction_rejects_invalid_setup() {
    let calibration = RendererConfig::default().calibration();

    assert!(matches!(
        Renderer::new(&calibration, 0, 10, 30.0, Vec::new()),
        Err(RenderError::InvalidDimensions { width: 0, height: 10 })
    ));
    assert!(matches!(
        Renderer::new(&calibration, 10, 10, 0.0, Vec::new()),
        Err(RenderError::InvalidFrameRate(_))
    ));
    assert!(matches!(
        Renderer::from_config(&RendererConfig::default().with_screen_size(10, 0), Vec::new()),
        Err(RenderError::Config(_))
    ));
}

#[test]
fn test_renderer_dimensions_follow_config() {
    let config = RendererConfig::default().with_screen_size(64, 20).with_target_fps(FAST_FPS);
    let renderer = Renderer::from_config(&config, Vec::new()).expect("valid config");

    assert_eq!(renderer.width(), 64);
    assert_eq!(renderer.height(), 20);
    assert_eq!(renderer.frame_buffer().shape(), (20, 64));
    assert_eq!(renderer.depth_buffer().shape(), (20, 64));
    assert_eq!(renderer.frame_synchronizer().frame_count(), 0);
}
