use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZeroSizedType;

/// Counts the drops of every [`Tracked`] value handed out by it (including clones of those values).
#[derive(Debug, Default, Clone)]
pub struct DropCounter {
    drops: Rc<Cell<usize>>,
}

impl DropCounter {
    pub fn new() -> DropCounter {
        DropCounter::default()
    }

    pub fn track(&self, value: i32) -> Tracked {
        Tracked {
            value,
            drops: Rc::clone(&self.drops),
            fuse: None,
        }
    }

    /// Like [`DropCounter::track`], but cloning the value panics once `fuse` reaches zero. Every
    /// successful clone decrements the shared fuse.
    pub fn track_fused(&self, value: i32, fuse: &Rc<Cell<usize>>) -> Tracked {
        Tracked {
            value,
            drops: Rc::clone(&self.drops),
            fuse: Some(Rc::clone(fuse)),
        }
    }

    pub fn dropped(&self) -> usize {
        self.drops.get()
    }
}

#[derive(Debug)]
pub struct Tracked {
    pub value: i32,
    drops: Rc<Cell<usize>>,
    fuse: Option<Rc<Cell<usize>>>,
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        if let Some(fuse) = &self.fuse {
            match fuse.get() {
                0 => panic!("clone fuse blown"),
                remaining => fuse.set(remaining - 1),
            }
        }

        Tracked {
            value: self.value,
            drops: Rc::clone(&self.drops),
            fuse: self.fuse.clone(),
        }
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}
