//! Entity declaration macro.

/// Declares a mapped entity type.
///
/// Expands to a fixed struct with an `id` member plus one `Option<Value>`
/// member per declared field, its [`MappedEntity`] implementation with
/// match-based field dispatch, and a descriptor materialized once on first
/// use. Field declarations read `"RemoteName" => local_name`.
///
/// The remote entity name can be given explicitly after the struct name;
/// without it, the struct's own name is used. `extends` seeds the field
/// registry from another mapped entity, whose fields are carried on a
/// `base` member.
///
/// ```ignore
/// map_entity! {
///     pub struct Contact ("Contact") {
///         "Name" => name,
///         "Email" => email,
///     }
/// }
///
/// map_entity! {
///     pub struct PremiumContact ("Contact") extends Contact {
///         "Tier__c" => tier,
///     }
/// }
/// ```
///
/// [`MappedEntity`]: crate::MappedEntity
#[macro_export]
macro_rules! map_entity {
    // Explicit remote entity name.
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident ($entity:literal) {
            $($remote:literal => $local:ident),* $(,)?
        }
    ) => {
        $crate::map_entity!(@root
            meta: [$(#[$meta])*],
            vis: [$vis],
            name: $name,
            seed: [.entity_name($entity)],
            fields: [$($remote => $local),*]
        );
    };

    // Remote entity name defaulted from the struct's own name.
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $($remote:literal => $local:ident),* $(,)?
        }
    ) => {
        $crate::map_entity!(@root
            meta: [$(#[$meta])*],
            vis: [$vis],
            name: $name,
            seed: [],
            fields: [$($remote => $local),*]
        );
    };

    // Explicit remote entity name, registry seeded from a parent entity.
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident ($entity:literal) extends $parent:ty {
            $($remote:literal => $local:ident),* $(,)?
        }
    ) => {
        $crate::map_entity!(@inherit
            meta: [$(#[$meta])*],
            vis: [$vis],
            name: $name,
            parent: [$parent],
            seed: [.entity_name($entity)],
            fields: [$($remote => $local),*]
        );
    };

    // Defaulted remote entity name, registry seeded from a parent entity.
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident extends $parent:ty {
            $($remote:literal => $local:ident),* $(,)?
        }
    ) => {
        $crate::map_entity!(@inherit
            meta: [$(#[$meta])*],
            vis: [$vis],
            name: $name,
            parent: [$parent],
            seed: [],
            fields: [$($remote => $local),*]
        );
    };

    (@root
        meta: [$(#[$meta:meta])*],
        vis: [$vis:vis],
        name: $name:ident,
        seed: [$($seed:tt)*],
        fields: [$($remote:literal => $local:ident),*]
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        $vis struct $name {
            pub id: Option<String>,
            $(pub $local: Option<$crate::Value>,)*
        }

        impl $crate::MappedEntity for $name {
            fn descriptor() -> &'static $crate::EntityDescriptor {
                static DESCRIPTOR: ::std::sync::OnceLock<$crate::EntityDescriptor> =
                    ::std::sync::OnceLock::new();
                DESCRIPTOR.get_or_init(|| {
                    $crate::EntityDescriptor::builder::<$name>()
                        $($seed)*
                        $(.field_as($remote, stringify!($local)))*
                        .build()
                })
            }

            fn id(&self) -> Option<&str> {
                self.id.as_deref()
            }

            fn set_id(&mut self, id: String) {
                self.id = Some(id);
            }

            fn field(&self, local: &str) -> Option<&$crate::Value> {
                match local {
                    $(stringify!($local) => self.$local.as_ref(),)*
                    _ => None,
                }
            }

            fn set_field(
                &mut self,
                local: &str,
                value: $crate::Value,
            ) -> $crate::ModelResult<()> {
                match local {
                    $(stringify!($local) => {
                        self.$local = Some(value);
                        Ok(())
                    })*
                    other => {
                        let _ = value;
                        Err($crate::ModelError::UnknownField {
                            entity: <Self as $crate::MappedEntity>::descriptor()
                                .entity_name()
                                .to_string(),
                            name: other.to_string(),
                        })
                    }
                }
            }
        }
    };

    (@inherit
        meta: [$(#[$meta:meta])*],
        vis: [$vis:vis],
        name: $name:ident,
        parent: [$parent:ty],
        seed: [$($seed:tt)*],
        fields: [$($remote:literal => $local:ident),*]
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        $vis struct $name {
            pub id: Option<String>,
            /// Carrier for the fields inherited from the parent entity.
            pub base: $parent,
            $(pub $local: Option<$crate::Value>,)*
        }

        impl $crate::MappedEntity for $name {
            fn descriptor() -> &'static $crate::EntityDescriptor {
                static DESCRIPTOR: ::std::sync::OnceLock<$crate::EntityDescriptor> =
                    ::std::sync::OnceLock::new();
                DESCRIPTOR.get_or_init(|| {
                    $crate::EntityDescriptor::builder::<$name>()
                        $($seed)*
                        .inherit(<$parent as $crate::MappedEntity>::descriptor())
                        $(.field_as($remote, stringify!($local)))*
                        .build()
                })
            }

            fn id(&self) -> Option<&str> {
                self.id.as_deref()
            }

            fn set_id(&mut self, id: String) {
                self.id = Some(id);
            }

            fn field(&self, local: &str) -> Option<&$crate::Value> {
                match local {
                    $(stringify!($local) => self.$local.as_ref(),)*
                    other => <$parent as $crate::MappedEntity>::field(&self.base, other),
                }
            }

            fn set_field(
                &mut self,
                local: &str,
                value: $crate::Value,
            ) -> $crate::ModelResult<()> {
                match local {
                    $(stringify!($local) => {
                        self.$local = Some(value);
                        Ok(())
                    })*
                    other => {
                        <$parent as $crate::MappedEntity>::set_field(&mut self.base, other, value)
                            .map_err(|_| $crate::ModelError::UnknownField {
                                entity: <Self as $crate::MappedEntity>::descriptor()
                                    .entity_name()
                                    .to_string(),
                                name: other.to_string(),
                            })
                    }
                }
            }
        }
    };
}
