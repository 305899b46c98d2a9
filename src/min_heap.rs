use thiserror::Error;

/// Array-backed binary min-heap. The smallest element under `Ord` sits at index 0.
#[derive(Debug, Clone)]
pub struct MinHeap<T> {
    elements: Vec<T>,
}

impl<T> MinHeap<T> {
    pub fn new() -> Self {
        MinHeap { elements: vec![] }
    }

    pub fn heap_size(&self) -> usize {
        self.elements.len()
    }

    fn parent(i: usize) -> usize {
        (i - 1) / 2
    }

    fn left(i: usize) -> usize {
        2 * i + 1
    }

    fn right(i: usize) -> usize {
        2 * i + 2
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HeapErr {
    #[error("index {0} out of range for heap of size {1}")]
    KeyError(usize, usize),
    #[error("heap underflow")]
    HeapUnderflow,
}

impl<T: Ord> MinHeap<T> {
    pub fn build(source: Vec<T>) -> Result<Self, HeapErr> {
        let mut heap = MinHeap { elements: source };
        let n = heap.heap_size();
        for i in (0..n / 2).rev() {
            heap.min_heapify(i)?;
        }
        Ok(heap)
    }

    pub fn valid_min_heap(&self) -> bool {
        (1..self.heap_size()).all(|i| self.elements[Self::parent(i)] <= self.elements[i])
    }

    pub fn min_heapify(&mut self, i: usize) -> Result<(), HeapErr> {
        let n = self.heap_size();
        if i >= n {
            return Err(HeapErr::KeyError(i, n));
        }
        let l = Self::left(i);
        let r = Self::right(i);
        let mut smallest = i;

        if l < n && self.elements[l] < self.elements[smallest] {
            smallest = l;
        }
        if r < n && self.elements[r] < self.elements[smallest] {
            smallest = r;
        }

        if smallest != i {
            self.elements.swap(i, smallest);
            return self.min_heapify(smallest);
        }

        Ok(())
    }

    pub fn insert(&mut self, value: T) {
        self.elements.push(value);
        let mut i = self.heap_size() - 1;
        while i > 0 {
            let p = Self::parent(i);
            if self.elements[p] <= self.elements[i] {
                break;
            }
            self.elements.swap(p, i);
            i = p;
        }
        debug_assert!(self.valid_min_heap());
    }

    pub fn extract_min(&mut self) -> Result<T, HeapErr> {
        let n = self.heap_size();
        if n == 0 {
            return Err(HeapErr::HeapUnderflow);
        }
        self.elements.swap(0, n - 1);
        let result = self.elements.pop().ok_or(HeapErr::HeapUnderflow)?;
        if !self.elements.is_empty() {
            self.min_heapify(0)?;
        }
        Ok(result)
    }
}

impl<T> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_extracts_in_order() {
        let mut heap = MinHeap::build(vec![9, 4, 7, 1, 8, 2, 2, 6]).unwrap();
        assert!(heap.valid_min_heap());
        heap.insert(0);
        heap.insert(5);
        assert!(heap.valid_min_heap());

        let mut out = Vec::new();
        while heap.heap_size() > 0 {
            out.push(heap.extract_min().unwrap());
        }
        assert_eq!(out, vec![0, 1, 2, 2, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_underflow() {
        let mut heap: MinHeap<u8> = MinHeap::new();
        assert_eq!(heap.extract_min(), Err(HeapErr::HeapUnderflow));
    }

    #[test]
    fn test_heapify_out_of_range() {
        let mut heap = MinHeap::build(vec![3, 1]).unwrap();
        assert_eq!(heap.min_heapify(2), Err(HeapErr::KeyError(2, 2)));
    }
}
