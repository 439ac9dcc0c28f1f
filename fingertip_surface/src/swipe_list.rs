// Copyright 2025 the Fingertip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::hash::Hash;

use fingertip_gesture::{ConfigError, GestureConfig, GestureRecognizer, TouchEvent};
use fingertip_swipe::{SwipeConfig, SwipeRecognizer};
use hashbrown::HashMap;

use crate::callbacks::SwipeCallbacks;
use crate::capability::{CapabilityContext, Haptics, NoHaptics};
use crate::earliest;
use crate::swipe_card::SwipeCard;

/// A keyed set of independent [`SwipeCard`]s sharing one configuration.
///
/// Each card owns its own session and timers. Removing a card tears it down,
/// so nothing scheduled for it can fire afterwards.
#[derive(Debug)]
pub struct SwipeList<K, C, H = NoHaptics> {
    gestures: GestureRecognizer,
    swipe: SwipeRecognizer,
    capabilities: CapabilityContext<H>,
    cards: HashMap<K, SwipeCard<C, H>>,
}

impl<K, C, H> SwipeList<K, C, H>
where
    K: Hash + Eq,
    C: SwipeCallbacks,
    H: Haptics + Clone,
{
    /// Creates an empty list, rejecting invalid configurations.
    pub fn new(
        gesture: GestureConfig,
        swipe: SwipeConfig,
        capabilities: CapabilityContext<H>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            gestures: GestureRecognizer::new(gesture)?,
            swipe: SwipeRecognizer::new(swipe)?,
            capabilities,
            cards: HashMap::new(),
        })
    }

    /// Adds a card under `key`, returning the torn-down card it replaced.
    pub fn insert(&mut self, key: K, callbacks: C) -> Option<SwipeCard<C, H>> {
        let card = SwipeCard::from_parts(
            self.gestures.clone(),
            self.swipe.clone(),
            callbacks,
            self.capabilities.clone(),
        );
        let mut replaced = self.cards.insert(key, card)?;
        replaced.teardown();
        Some(replaced)
    }

    /// Removes and tears down the card under `key`.
    pub fn remove(&mut self, key: &K) -> Option<SwipeCard<C, H>> {
        let mut card = self.cards.remove(key)?;
        card.teardown();
        Some(card)
    }

    /// The card under `key`.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&SwipeCard<C, H>> {
        self.cards.get(key)
    }

    /// The card under `key`, mutably.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut SwipeCard<C, H>> {
        self.cards.get_mut(key)
    }

    /// Routes a raw touch event to the card under `key`.
    ///
    /// Returns `false` if there is no such card.
    pub fn handle_touch(&mut self, key: &K, event: &TouchEvent) -> bool {
        match self.cards.get_mut(key) {
            Some(card) => {
                card.handle_touch(event);
                true
            }
            None => {
                log::trace!("touch for a removed card ignored");
                false
            }
        }
    }

    /// Fires timers due at `now` on every card.
    pub fn poll(&mut self, now: u64) {
        for card in self.cards.values_mut() {
            card.poll(now);
        }
    }

    /// The earliest deadline across all cards.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        earliest(self.cards.values().map(SwipeCard::next_deadline))
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns `true` if there are no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterates over `(key, card)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &SwipeCard<C, H>)> {
        self.cards.iter()
    }
}
