macro_rules! make_index {
    ($vis:vis $name:ident) => {
        /// Index type.
        #[derive(
            Copy,
            Clone,
            Debug,
            Hash,
            Eq,
            PartialEq,
            Ord,
            PartialOrd,
        )]
        $vis struct $name(u32);

        impl $name {
            /// Create new index from `usize`.
            #[inline(always)]
            $vis fn new(x: usize) -> Self {
                debug_assert!(x < u32::MAX as usize);
                Self(x as u32)
            }

            /// Returns the index as `usize`.
            #[inline(always)]
            $vis fn index(&self) -> usize { self.0 as usize }

            /// Sentinel for "no element".
            #[inline(always)]
            $vis fn end() -> Self { Self(u32::MAX) }

            /// Returns `false` for the sentinel.
            #[inline(always)]
            $vis fn is_valid(&self) -> bool { self.0 != u32::MAX }
        }

        impl ::std::default::Default for $name {
            #[inline(always)]
            fn default() -> Self {
                Self::end()
            }
        }

        impl ::std::convert::From<usize> for $name {
            #[inline(always)]
            fn from(x: usize) -> Self {
                Self::new(x)
            }
        }

        impl ::std::convert::From<$name> for usize {
            #[inline(always)]
            fn from(x: $name) -> Self {
                x.index()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

make_index!(pub(crate) VertexIndex);
make_index!(pub(crate) ClassIndex);

impl VertexIndex {
    /// Converts an `Option` style lookup into the sentinel representation used by the arenas.
    #[inline(always)]
    pub(crate) fn into_option(self) -> Option<Self> {
        self.is_valid().then_some(self)
    }
}
