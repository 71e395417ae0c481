use std::collections::VecDeque;

use super::particle::Particle;
use crate::math::Real;

/// Stable index of a particle slot. Valid until that particle is removed.
pub type SlotId = usize;

/// Result of a successful insertion.
#[derive(Clone, Debug)]
pub struct Inserted {
    pub slot: SlotId,
    /// The oldest particle, if it had to make room.
    pub evicted: Option<Particle>,
}

/// Fixed-capacity particle arena.
///
/// Slots are allocated once. Freed slots go on a free list and the insertion
/// order is kept in a separate queue, so eviction is FIFO without moving any
/// particle.
#[derive(Clone)]
pub struct ParticleSet {
    slots: Vec<Option<Particle>>,
    free: Vec<SlotId>,
    // Oldest at the front.
    order: VecDeque<SlotId>,
    next_serial: u64,
}

impl ParticleSet {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
            // Reversed so low slots are handed out first.
            free: (0..capacity).rev().collect(),
            order: VecDeque::with_capacity(capacity),
            next_serial: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.free.is_empty()
    }

    /// Append a particle at the tail, evicting the oldest one when full.
    ///
    /// Returns `None` only for a zero-capacity set.
    pub fn insert(&mut self, mut particle: Particle) -> Option<Inserted> {
        let evicted = if self.is_full() {
            self.evict_oldest()
        } else {
            None
        };
        let slot = self.free.pop()?;

        particle.serial = self.next_serial;
        self.next_serial += 1;
        self.slots[slot] = Some(particle);
        self.order.push_back(slot);

        Some(Inserted { slot, evicted })
    }

    pub fn evict_oldest(&mut self) -> Option<Particle> {
        let slot = self.order.pop_front()?;
        self.free.push(slot);
        self.slots[slot].take()
    }

    pub fn remove(&mut self, slot: SlotId) -> Option<Particle> {
        let particle = self.slots.get_mut(slot)?.take()?;
        if let Some(position) = self.order.iter().position(|&s| s == slot) {
            self.order.remove(position);
        }
        self.free.push(slot);
        Some(particle)
    }

    /// Keep only the particles matching `keep`. Returns how many were removed.
    pub fn retain(&mut self, mut keep: impl FnMut(&Particle) -> bool) -> usize {
        let Self {
            slots, free, order, ..
        } = self;
        let mut removed = 0;

        order.retain(|&slot| {
            let kept = slots[slot].as_ref().is_some_and(&mut keep);
            if !kept {
                slots[slot] = None;
                free.push(slot);
                removed += 1;
            }
            kept
        });

        removed
    }

    pub fn remove_failed(&mut self) -> usize {
        self.retain(|particle| !particle.failed)
    }

    /// Drop particles resting on the floor at `floor_y`: within `epsilon` of it
    /// and slower than `max_speed`.
    pub fn evict_settled(&mut self, floor_y: Real, epsilon: Real, max_speed: Real) -> usize {
        self.retain(|particle| {
            let on_floor = particle.position.y >= floor_y - epsilon;
            !(on_floor && particle.speed() < max_speed)
        })
    }

    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.free.clear();
        self.free.extend((0..self.slots.len()).rev());
        self.order.clear();
    }

    pub fn get(&self, slot: SlotId) -> Option<&Particle> {
        self.slots.get(slot)?.as_ref()
    }

    pub fn get_mut(&mut self, slot: SlotId) -> Option<&mut Particle> {
        self.slots.get_mut(slot)?.as_mut()
    }

    /// Live slots, oldest first.
    pub fn slot_ids(&self) -> impl Iterator<Item = SlotId> + '_ {
        self.order.iter().copied()
    }

    /// Live particles, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.order.iter().filter_map(|&slot| self.slots[slot].as_ref())
    }

    /// Live particles in slot order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Particle> {
        self.slots.iter_mut().filter_map(Option::as_mut)
    }

    pub fn oldest(&self) -> Option<&Particle> {
        self.get(*self.order.front()?)
    }

    pub fn newest(&self) -> Option<&Particle> {
        self.get(*self.order.back()?)
    }
}
