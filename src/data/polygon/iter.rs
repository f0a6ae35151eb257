use crate::data::Point;

pub struct Iter<'a, T: 'a> {
  pub(crate) iter: std::slice::Iter<'a, Point<T, 2>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
  type Item = &'a Point<T, 2>;
  fn next(&mut self) -> Option<&'a Point<T, 2>> {
    self.iter.next()
  }
}

/// Directed boundary edges `(src, dst)`, including the closing edge from the
/// last vertex back to the first.
pub struct EdgeIter<'a, T: 'a> {
  pub(crate) vertices: &'a [Point<T, 2>],
  pub(crate) next: usize,
}

impl<'a, T> Iterator for EdgeIter<'a, T> {
  type Item = (&'a Point<T, 2>, &'a Point<T, 2>);
  fn next(&mut self) -> Option<Self::Item> {
    let n = self.vertices.len();
    if self.next >= n {
      return None;
    }
    let src = &self.vertices[self.next];
    let dst = &self.vertices[(self.next + 1) % n];
    self.next += 1;
    Some((src, dst))
  }
}
