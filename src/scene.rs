use crate::color::Color;
use crate::shape::{Point, Shape, ShapeId, ShapeKind, Style};

/// Default canvas background, restored on reset.
pub const DEFAULT_BACKGROUND: Color = Color::from_rgb(0xff, 0xe4, 0xc4);

/// One drawing: an ordered sequence of shapes plus a background color.
///
/// Sequence order is the z-order, back to front — the vector is the sole
/// authority on paint order, and no id appears twice. All mutation goes
/// through the operations below; they are synchronous and infallible, with
/// unknown ids treated as no-ops.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    shapes: Vec<Shape>,
    background: Color,
    next_id: u64,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    pub fn new() -> Self {
        Self {
            shapes: Vec::new(),
            background: DEFAULT_BACKGROUND,
            next_id: 1,
        }
    }

    /// Shapes in z-order, back to front.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn set_background(&mut self, color: Color) {
        self.background = color;
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|shape| shape.id() == id)
    }

    fn get_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|shape| shape.id() == id)
    }

    fn position_of(&self, id: ShapeId) -> Option<usize> {
        self.shapes.iter().position(|shape| shape.id() == id)
    }

    /// Index of the shape in the z-order (0 = rearmost), if present.
    pub fn z_position(&self, id: ShapeId) -> Option<usize> {
        self.position_of(id)
    }

    fn fresh_id(&mut self) -> ShapeId {
        let id = ShapeId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Appends a new zero-sized shape at the front-most z-order, styled from
    /// `style`, and returns its id.
    pub fn create_shape(&mut self, kind: ShapeKind, origin: Point, style: Style) -> ShapeId {
        let id = self.fresh_id();
        self.shapes.push(Shape::new(id, kind, origin, style));
        id
    }

    /// Used by the codec when rebuilding a scene: appends an already-built
    /// shape under a fresh id, preserving call order as z-order.
    pub(crate) fn append_shape(
        &mut self,
        kind: ShapeKind,
        origin: Point,
        dimensions: (f64, f64),
        style: Style,
    ) -> ShapeId {
        let id = self.create_shape(kind, origin, style);
        if let Some(shape) = self.get_mut(id) {
            shape.resize_to(Point::new(origin.x + dimensions.0, origin.y + dimensions.1));
        }
        id
    }

    /// Recomputes the shape's dimensions from `drag` (see [`Shape::resize_to`]).
    pub fn resize_shape(&mut self, id: ShapeId, drag: Point) {
        if let Some(shape) = self.get_mut(id) {
            shape.resize_to(drag);
        }
    }

    /// Moves the shape's anchor to `point`.
    pub fn move_shape(&mut self, id: ShapeId, point: Point) {
        if let Some(shape) = self.get_mut(id) {
            shape.move_to(point);
        }
    }

    pub fn set_fill(&mut self, id: ShapeId, color: Color) {
        if let Some(shape) = self.get_mut(id) {
            shape.fill = color;
        }
    }

    pub fn set_outline(&mut self, id: ShapeId, color: Color) {
        if let Some(shape) = self.get_mut(id) {
            shape.outline = color;
        }
    }

    /// Stores the thickness as given. The `[0, 20]` range is enforced by the
    /// slider that drives this, not by the model.
    pub fn set_outline_thickness(&mut self, id: ShapeId, thickness: f64) {
        if let Some(shape) = self.get_mut(id) {
            shape.outline_thickness = thickness;
        }
    }

    /// Topmost shape containing `point`, if any.
    pub fn shape_at(&self, point: Point) -> Option<ShapeId> {
        self.shapes
            .iter()
            .rev()
            .find(|shape| shape.contains(point))
            .map(Shape::id)
    }

    /// Removes the shape. Returns false (and changes nothing) if the id is
    /// not in the scene.
    pub fn delete_shape(&mut self, id: ShapeId) -> bool {
        match self.position_of(id) {
            Some(index) => {
                self.shapes.remove(index);
                true
            }
            None => false,
        }
    }

    /// Moves the shape to the end of the sequence (front-most).
    pub fn bring_to_front(&mut self, id: ShapeId) {
        if let Some(index) = self.position_of(id) {
            let shape = self.shapes.remove(index);
            self.shapes.push(shape);
        }
    }

    /// Moves the shape to the start of the sequence (rearmost).
    pub fn send_to_back(&mut self, id: ShapeId) {
        if let Some(index) = self.position_of(id) {
            let shape = self.shapes.remove(index);
            self.shapes.insert(0, shape);
        }
    }

    /// Empties the scene and restores the default background.
    pub fn reset(&mut self) {
        self.shapes.clear();
        self.background = DEFAULT_BACKGROUND;
        self.next_id = 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene_with_three_rects() -> (Scene, [ShapeId; 3]) {
        let mut scene = Scene::new();
        let style = Style::default();
        let a = scene.create_shape(ShapeKind::Rectangle, Point::new(0.0, 0.0), style);
        let b = scene.create_shape(ShapeKind::Rectangle, Point::new(10.0, 10.0), style);
        let c = scene.create_shape(ShapeKind::Rectangle, Point::new(20.0, 20.0), style);
        for id in [a, b, c] {
            let origin = scene.get(id).unwrap().origin();
            scene.resize_shape(id, Point::new(origin.x + 30.0, origin.y + 30.0));
        }
        (scene, [a, b, c])
    }

    #[test]
    fn creation_orders_back_to_front() {
        let (scene, [a, b, c]) = scene_with_three_rects();
        assert_eq!(scene.z_position(a), Some(0));
        assert_eq!(scene.z_position(b), Some(1));
        assert_eq!(scene.z_position(c), Some(2));
    }

    #[test]
    fn ids_are_unique() {
        let (scene, ids) = scene_with_three_rects();
        assert_eq!(scene.len(), 3);
        assert!(ids[0] != ids[1] && ids[1] != ids[2]);
    }

    #[test]
    fn hit_test_prefers_the_front_shape() {
        let (scene, [_, _, c]) = scene_with_three_rects();
        // (25, 25) lies inside all three; the front-most one wins.
        assert_eq!(scene.shape_at(Point::new(25.0, 25.0)), Some(c));
        assert_eq!(scene.shape_at(Point::new(500.0, 500.0)), None);
    }

    #[test]
    fn delete_removes_exactly_one() {
        let (mut scene, [a, b, c]) = scene_with_three_rects();
        assert!(scene.delete_shape(b));
        assert_eq!(scene.len(), 2);
        assert!(scene.get(b).is_none());
        assert_eq!(scene.z_position(a), Some(0));
        assert_eq!(scene.z_position(c), Some(1));
    }

    #[test]
    fn delete_unknown_id_is_a_noop() {
        let (mut scene, _) = scene_with_three_rects();
        assert!(!scene.delete_shape(ShapeId(999)));
        assert_eq!(scene.len(), 3);
    }

    #[test]
    fn reorder_moves_to_the_ends() {
        let (mut scene, [a, b, c]) = scene_with_three_rects();
        scene.bring_to_front(a);
        assert_eq!(scene.z_position(a), Some(2));
        assert_eq!(scene.z_position(b), Some(0));
        scene.send_to_back(c);
        assert_eq!(scene.z_position(c), Some(0));
        assert_eq!(scene.z_position(a), Some(2));
    }

    #[test]
    fn style_setters_target_one_shape() {
        let (mut scene, [a, b, _]) = scene_with_three_rects();
        let red = Color::from_rgb(0xff, 0, 0);
        scene.set_fill(a, red);
        scene.set_outline_thickness(a, 9.0);
        assert_eq!(scene.get(a).unwrap().fill, red);
        assert_eq!(scene.get(a).unwrap().outline_thickness, 9.0);
        assert_eq!(scene.get(b).unwrap().fill, Style::default().fill);
    }

    #[test]
    fn reset_restores_defaults() {
        let (mut scene, _) = scene_with_three_rects();
        scene.set_background(Color::from_rgb(0, 0, 0));
        scene.reset();
        assert!(scene.is_empty());
        assert_eq!(scene.background(), DEFAULT_BACKGROUND);
    }
}
