/*!
Doubly linked circular lists over arena handles.

Every list family in the mesh (disk, radial and boundary cycles) stores its
`next`/`prev` pointers in a [`Link`] embedded in the element that owns the
node. [`CircularList`] provides the splicing and iteration logic once, for any
storage that can hand out those links by handle.
*/

use crate::error::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct Link<H> {
    pub(crate) next: H,
    pub(crate) prev: H,
}

impl<H: Copy> Link<H> {
    /// A node that forms a cycle of length one.
    pub(crate) fn lonely(h: H) -> Self {
        Link { next: h, prev: h }
    }
}

pub(crate) trait CircularList<H>
where
    H: Copy + Eq,
{
    /// The link of `h`, or `None` if no node is stored at `h`.
    fn try_link(&self, h: H) -> Option<&Link<H>>;

    /// The link of `h`. Panics if no node is stored at `h`.
    fn link_mut(&mut self, h: H) -> &mut Link<H>;

    /// Upper bound on the length of any valid cycle in this storage.
    fn max_cycle_len(&self) -> usize;

    fn set_next(&mut self, prev: H, next: H) {
        self.link_mut(prev).next = next;
        self.link_mut(next).prev = prev;
    }

    /// Remove `node` from its cycle, reconnecting its neighbours. The node is
    /// left as a cycle of length one.
    fn unlink(&mut self, node: H) {
        let Link { next, prev } = *self.link_mut(node);
        if next != node {
            self.set_next(prev, next);
        }
        *self.link_mut(node) = Link::lonely(node);
    }

    /// Move `node` from wherever it is to right after `at`.
    fn insert_after(&mut self, at: H, node: H) {
        if at == node {
            return;
        }
        self.unlink(node);
        let next = self.link_mut(at).next;
        self.set_next(at, node);
        self.set_next(node, next);
    }

    /// Move `node` from wherever it is to right before `at`.
    fn insert_before(&mut self, at: H, node: H) {
        if at == node {
            return;
        }
        self.unlink(node);
        let prev = self.link_mut(at).prev;
        self.set_next(prev, node);
        self.set_next(node, at);
    }

    /// Walk the cycle starting at `start`, reporting [`Error::NonCircular`] if
    /// the walk hits a missing node or fails to return to `start`.
    fn cycle(&self, start: H, forward: bool) -> Cycle<'_, Self, H, true>
    where
        Self: Sized,
    {
        Cycle::new(self, Some(start), forward)
    }

    /// Same as `cycle`, except the walk silently stops when it runs into a
    /// missing node. This is for lists that are still being assembled.
    fn cycle_unchecked(&self, start: Option<H>, forward: bool) -> Cycle<'_, Self, H, false>
    where
        Self: Sized,
    {
        Cycle::new(self, start, forward)
    }

    /// Collect the whole cycle, failing if it is not circular.
    fn snapshot(&self, start: H) -> Result<Vec<H>, Error>
    where
        Self: Sized,
    {
        self.cycle(start, true).collect()
    }
}

pub(crate) struct Cycle<'a, L, H, const CHECKED: bool> {
    list: &'a L,
    start: Option<H>,
    current: Option<H>,
    forward: bool,
    remaining: usize,
}

impl<'a, L, H, const CHECKED: bool> Cycle<'a, L, H, CHECKED>
where
    L: CircularList<H>,
    H: Copy + Eq,
{
    fn new(list: &'a L, start: Option<H>, forward: bool) -> Self {
        Cycle {
            list,
            start,
            current: start,
            forward,
            remaining: list.max_cycle_len(),
        }
    }

    /// Advance the walk. `None` means the walk broke before returning to the
    /// start.
    fn step(&mut self, current: H) -> Option<H> {
        let link = self.list.try_link(current)?;
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let next = if self.forward { link.next } else { link.prev };
        self.current = if Some(next) == self.start {
            None
        } else {
            Some(next)
        };
        Some(current)
    }
}

impl<L, H> Iterator for Cycle<'_, L, H, true>
where
    L: CircularList<H>,
    H: Copy + Eq,
{
    type Item = Result<H, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;
        match self.step(current) {
            Some(h) => Some(Ok(h)),
            None => {
                self.current = None;
                Some(Err(Error::NonCircular))
            }
        }
    }
}

impl<L, H> Iterator for Cycle<'_, L, H, false>
where
    L: CircularList<H>,
    H: Copy + Eq,
{
    type Item = H;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;
        let out = self.step(current);
        if out.is_none() {
            self.current = None;
        }
        out
    }
}

#[cfg(test)]
mod test {
    use super::{CircularList, Link};
    use crate::error::Error;

    /// Plain vector of nodes, with `None` standing in for a removed node.
    struct Nodes(Vec<Option<Link<u32>>>);

    impl Nodes {
        fn new(n: u32) -> Self {
            Nodes((0..n).map(|i| Some(Link::lonely(i))).collect())
        }

        fn chain(n: u32) -> Self {
            let mut nodes = Self::new(n);
            for i in 1..n {
                nodes.insert_after(i - 1, i);
            }
            nodes
        }
    }

    impl CircularList<u32> for Nodes {
        fn try_link(&self, h: u32) -> Option<&Link<u32>> {
            self.0.get(h as usize).and_then(|l| l.as_ref())
        }

        fn link_mut(&mut self, h: u32) -> &mut Link<u32> {
            self.0[h as usize].as_mut().expect("Node was removed")
        }

        fn max_cycle_len(&self) -> usize {
            self.0.len()
        }
    }

    #[test]
    fn t_insert_after() {
        let nodes = Nodes::chain(4);
        assert_eq!(nodes.snapshot(0).unwrap(), vec![0, 1, 2, 3]);
        assert_eq!(
            nodes
                .cycle(0, false)
                .collect::<Result<Vec<_>, _>>()
                .unwrap(),
            vec![0, 3, 2, 1]
        );
    }

    #[test]
    fn t_insert_before() {
        let mut nodes = Nodes::new(3);
        nodes.insert_before(0, 1);
        nodes.insert_before(0, 2);
        assert_eq!(nodes.snapshot(0).unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn t_insert_moves_node() {
        let mut nodes = Nodes::chain(4);
        // Moving 1 to after 3 unlinks it from between 0 and 2 first.
        nodes.insert_after(3, 1);
        assert_eq!(nodes.snapshot(0).unwrap(), vec![0, 2, 3, 1]);
    }

    #[test]
    fn t_unlink() {
        let mut nodes = Nodes::chain(3);
        nodes.unlink(1);
        assert_eq!(nodes.snapshot(0).unwrap(), vec![0, 2]);
        assert_eq!(nodes.snapshot(1).unwrap(), vec![1]);
        assert_eq!(*nodes.try_link(1).unwrap(), Link::lonely(1));
        // Unlinking a lonely node is a no-op.
        nodes.unlink(1);
        assert_eq!(nodes.snapshot(1).unwrap(), vec![1]);
    }

    #[test]
    fn t_missing_node() {
        let mut nodes = Nodes::chain(3);
        nodes.0[2] = None;
        assert_eq!(nodes.snapshot(0), Err(Error::NonCircular));
        // The unchecked walk just stops.
        assert_eq!(
            nodes.cycle_unchecked(Some(0), true).collect::<Vec<_>>(),
            vec![0, 1]
        );
    }

    #[test]
    fn t_does_not_return_to_start() {
        let mut nodes = Nodes::chain(3);
        // 0 -> 1 -> 2 -> 1 -> ... never comes back to 0.
        nodes.link_mut(2).next = 1;
        assert_eq!(nodes.snapshot(0), Err(Error::NonCircular));
        assert_eq!(nodes.cycle_unchecked(Some(0), true).count(), 3);
    }

    #[test]
    fn t_empty_unchecked() {
        let nodes = Nodes::new(2);
        assert_eq!(nodes.cycle_unchecked(None, true).count(), 0);
    }
}
