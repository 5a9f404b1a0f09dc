//! Nearest-hit selection

use super::{forward, identity, selected_count, ProbeNode};
use crate::foundation::math::Vec3;
use crate::physics::RayError;
use crate::scene::{Cube, Node, NodeId, Scene, SceneError, Sphere};
use approx::assert_relative_eq;

#[test]
fn test_nearest_hit_is_selected() {
    let mut scene = Scene::new();
    scene.add_node(ProbeNode::hit(5.0));
    let near = scene.add_node(ProbeNode::hit(2.0));
    scene.add_node(ProbeNode::hit(7.0));
    scene.add_node(ProbeNode::miss());

    let origin = Vec3::new(1.0, 0.0, 0.0);
    let picked = scene.pick(origin, forward(), &identity()).unwrap();

    assert_eq!(picked, Some(near));
    let selection = scene.selection().unwrap();
    assert_eq!(selection.node, near);
    assert_eq!(selection.depth, 2.0);
    assert_eq!(selection.hit_point, Vec3::new(1.0, 0.0, -2.0));
}

#[test]
fn test_equal_distances_keep_first_inserted() {
    let mut scene = Scene::new();
    scene.add_node(ProbeNode::hit(9.0));
    let first = scene.add_node(ProbeNode::hit(3.0));
    let second = scene.add_node(ProbeNode::hit(3.0));

    assert_eq!(scene.pick(Vec3::zeros(), forward(), &identity()).unwrap(), Some(first));
    assert!(!scene.node(second).unwrap().is_selected());
}

#[test]
fn test_pick_leaves_exactly_one_selected() {
    let mut scene = Scene::new();
    let far = scene.add_node(ProbeNode::hit(4.0));
    scene.add_node(ProbeNode::hit(6.0));

    // Hand-set a stale flag on a node that will not win
    scene.node_mut(NodeId::new(1)).unwrap().set_selected(true);

    for _ in 0..3 {
        let picked = scene.pick(Vec3::zeros(), forward(), &identity()).unwrap();
        assert_eq!(picked, Some(far));
        assert_eq!(selected_count(&scene), 1);
        assert!(scene.node(far).unwrap().is_selected());
        assert_eq!(scene.selected(), Some(far));
    }
}

#[test]
fn test_miss_clears_previous_selection() {
    let mut scene = Scene::new();
    let mut sphere = Sphere::new();
    sphere.translate(Vec3::new(0.0, 0.0, -10.0));
    let id = scene.add_node(Box::new(sphere));

    assert_eq!(scene.pick(Vec3::zeros(), forward(), &identity()).unwrap(), Some(id));

    let up = Vec3::new(0.0, 1.0, 0.0);
    assert_eq!(scene.pick(Vec3::zeros(), up, &identity()).unwrap(), None);
    assert_eq!(scene.selected(), None);
    assert!(scene.selection().is_none());
    assert_eq!(selected_count(&scene), 0);
}

#[test]
fn test_pick_on_empty_scene() {
    let mut scene = Scene::new();
    assert_eq!(scene.pick(Vec3::zeros(), forward(), &identity()).unwrap(), None);
}

#[test]
fn test_non_finite_distances_never_win() {
    let mut scene = Scene::new();
    scene.add_node(ProbeNode::hit(f32::NAN));
    scene.add_node(ProbeNode::hit(f32::NEG_INFINITY));
    let real = scene.add_node(ProbeNode::hit(3.0));
    scene.add_node(ProbeNode::hit(f32::NAN));

    assert_eq!(scene.pick(Vec3::zeros(), forward(), &identity()).unwrap(), Some(real));
    assert_eq!(selected_count(&scene), 1);
}

#[test]
fn test_degenerate_ray_keeps_selection() {
    let mut scene = Scene::new();
    let id = scene.add_node(ProbeNode::hit(1.0));
    scene.pick(Vec3::zeros(), forward(), &identity()).unwrap();

    let err = scene.pick(Vec3::zeros(), Vec3::zeros(), &identity()).unwrap_err();
    assert_eq!(err, SceneError::DegenerateRay(RayError::ZeroDirection));
    assert_eq!(scene.selected(), Some(id));
    assert!(scene.node(id).unwrap().is_selected());

    let nan_origin = Vec3::new(f32::NAN, 0.0, 0.0);
    let err = scene.pick(nan_origin, forward(), &identity()).unwrap_err();
    assert_eq!(err, SceneError::DegenerateRay(RayError::NonFinite));
    assert_eq!(scene.selected(), Some(id));
}

#[test]
fn test_primitives_occlude_by_distance() {
    let mut scene = Scene::new();
    let mut far_sphere = Sphere::new();
    far_sphere.translate(Vec3::new(0.0, 0.0, -10.0));
    let mut near_cube = Cube::new();
    near_cube.translate(Vec3::new(0.0, 0.0, -5.0));

    scene.add_node(Box::new(far_sphere));
    let cube = scene.add_node(Box::new(near_cube));

    assert_eq!(scene.pick(Vec3::zeros(), forward(), &identity()).unwrap(), Some(cube));
    let selection = scene.selection().unwrap();
    assert_relative_eq!(selection.depth, 4.5, epsilon = 1e-5);
    assert_relative_eq!(selection.hit_point, Vec3::new(0.0, 0.0, -4.5), epsilon = 1e-5);
}

#[test]
fn test_depth_is_in_ray_units() {
    let mut scene = Scene::new();
    let mut sphere = Sphere::new();
    sphere.translate(Vec3::new(0.0, 0.0, -10.0));
    scene.add_node(Box::new(sphere));

    let long = Vec3::new(0.0, 0.0, -2.0);
    scene.pick(Vec3::zeros(), long, &identity()).unwrap();

    let selection = scene.selection().unwrap();
    assert_relative_eq!(selection.depth, 4.75, epsilon = 1e-5);
    assert_relative_eq!(selection.hit_point, Vec3::new(0.0, 0.0, -9.5), epsilon = 1e-5);
}
