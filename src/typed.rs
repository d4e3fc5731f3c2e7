use std::fmt;

use thiserror::Error;

use crate::buffer::{Equivalent, GrowMode, Iter, RingBuffer};
use crate::config::BufferConfig;
use crate::value::Kinded;

/// 型制約付きバッファの操作エラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BufferError<K: fmt::Debug> {
    /// 書き込もうとした要素の型がバッファの要素型と一致しない
    #[error("cannot write a {actual:?} element into a buffer typed {expected:?}")]
    InvalidTypeWrite { expected: K, actual: K },
    /// 空でないバッファの要素型は変更できない
    #[error("cannot change the element type while the buffer holds {len} element(s)")]
    InvalidTypeChange { len: usize },
}

/// 実行時型チェック付きの FIFO バッファ
///
/// 要素型（`Kinded::Kind`）を設定すると、以後の書き込みは型が一致する
/// 要素だけを受け付ける。制約なしでも使える。
pub struct TypedRingBuffer<T: Kinded> {
    inner: RingBuffer<T>,
    element_type: Option<T::Kind>,
}

impl<T: Kinded> TypedRingBuffer<T> {
    /// 要素型の制約なしで作成
    pub fn new(config: BufferConfig) -> Self {
        Self {
            inner: RingBuffer::with_config(config),
            element_type: None,
        }
    }

    /// 要素型の制約付きで作成
    pub fn with_element_type(config: BufferConfig, kind: T::Kind) -> Self {
        Self {
            inner: RingBuffer::with_config(config),
            element_type: Some(kind),
        }
    }

    /// 型チェック付き書き込み。拒否時はバッファを変更しない。
    pub fn write(&mut self, element: T) -> Result<(), BufferError<T::Kind>> {
        if let Some(expected) = self.element_type {
            let actual = element.kind();
            if actual != expected {
                tracing::debug!(?expected, ?actual, "rejected write with mismatched kind");
                return Err(BufferError::InvalidTypeWrite { expected, actual });
            }
        }
        self.inner.write(element);
        Ok(())
    }

    /// 要素型は空のバッファに対してのみ設定できる
    pub fn set_element_type(&mut self, kind: T::Kind) -> Result<(), BufferError<T::Kind>> {
        if !self.inner.is_empty() {
            return Err(BufferError::InvalidTypeChange {
                len: self.inner.len(),
            });
        }
        self.element_type = Some(kind);
        Ok(())
    }

    pub fn element_type(&self) -> Option<T::Kind> {
        self.element_type
    }

    pub fn read(&mut self) -> Option<T> {
        self.inner.read()
    }

    pub fn contains<Q>(&self, query: &Q) -> bool
    where
        Q: Equivalent<T> + ?Sized,
    {
        self.inner.contains(query)
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    pub fn grow_mode(&self) -> GrowMode {
        self.inner.grow_mode()
    }

    pub fn set_grow_mode(&mut self, mode: GrowMode) {
        self.inner.set_grow_mode(mode);
    }

    /// 要素型の制約は維持したまま全要素を破棄する
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.inner.iter()
    }
}

impl<T: Kinded + fmt::Debug> TypedRingBuffer<T> {
    pub fn describe(&self) -> String {
        self.inner.describe()
    }
}
