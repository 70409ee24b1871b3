use glam::Vec3;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EdgeBuffer {
    frame: u64,
    pairs: Vec<(usize, usize)>,
    vertices: Vec<Vec3>,
}

impl EdgeBuffer {
    pub fn build(frame: u64, pairs: Vec<(usize, usize)>, positions: &[Vec3]) -> Self {
        let mut vertices = Vec::with_capacity(pairs.len() * 2);
        let mut resolved = Vec::with_capacity(pairs.len());
        for (i, j) in pairs {
            let (Some(&start), Some(&end)) = (positions.get(i), positions.get(j)) else {
                continue;
            };
            vertices.push(start);
            vertices.push(end);
            resolved.push((i, j));
        }

        Self {
            frame,
            pairs: resolved,
            vertices,
        }
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn pairs(&self) -> &[(usize, usize)] {
        &self.pairs
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn segment_count(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn segments(&self) -> impl ExactSizeIterator<Item = [Vec3; 2]> + '_ {
        self.vertices
            .chunks_exact(2)
            .map(|segment| [segment[0], segment[1]])
    }

    pub fn retained_bytes(&self) -> usize {
        self.vertices.capacity() * std::mem::size_of::<Vec3>()
            + self.pairs.capacity() * std::mem::size_of::<(usize, usize)>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_follow_pair_order() {
        let positions = [Vec3::ZERO, Vec3::X, Vec3::Y];
        let buffer = EdgeBuffer::build(3, vec![(0, 2), (1, 2)], &positions);

        assert_eq!(buffer.frame(), 3);
        assert_eq!(buffer.segment_count(), 2);
        assert_eq!(buffer.vertices(), &[Vec3::ZERO, Vec3::Y, Vec3::X, Vec3::Y]);
        assert_eq!(
            buffer.segments().collect::<Vec<_>>(),
            vec![[Vec3::ZERO, Vec3::Y], [Vec3::X, Vec3::Y]]
        );
    }

    #[test]
    fn out_of_range_pairs_are_dropped() {
        let buffer = EdgeBuffer::build(0, vec![(0, 9)], &[Vec3::ZERO]);
        assert!(buffer.is_empty());
        assert!(buffer.vertices().is_empty());
    }
}
