use crate::base;

/// The expected or actual objects deserialized from a repo directory. Unset
/// fields correspond to nonexistent files.
#[derive(Debug, PartialEq, Eq, Default)]
pub struct State {
    config: Option<base::Config>,
    codes: Option<base::Codelist>,
    sales: Option<base::Salelist>,
    prices: Option<base::Pricelist>,
    categories: Option<base::Categoryfeed>,
}

macro_rules! setter {
    ($(#[$meta:meta])* $name:ident, $field:ident, $t:ty) => {
        $(#[$meta])*
        pub fn $name<T>(mut self, obj: T) -> Self
        where
            T: TryInto<$t> + std::fmt::Debug,
            <T as TryInto<$t>>::Error: std::fmt::Debug,
        {
            self.$field = Some(obj.try_into().unwrap());
            self
        }
    };
}

impl State {
    /// Constructs the representation of an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    setter!(
        /// Sets repo's [`base::Config`].
        with_config, config, base::Config
    );
    setter!(with_codes, codes, base::Codelist);
    setter!(with_sales, sales, base::Salelist);
    setter!(with_prices, prices, base::Pricelist);
    setter!(with_categories, categories, base::Categoryfeed);

    /// Deserializes objects from `fs`.
    pub fn from_fs(fs: &base::Fs) -> Self {
        macro_rules! read {
            ($t:ty) => {{
                let p = fs.path::<$t>();
                if p.exists() {
                    Some(fs.read::<$t>().unwrap())
                } else {
                    None
                }
            }};
        }

        Self {
            config: read!(base::Config),
            codes: read!(base::Codelist),
            sales: read!(base::Salelist),
            prices: read!(base::Pricelist),
            categories: read!(base::Categoryfeed),
        }
    }
}

/// Representation of a repo directory's file contents. Unset fields correspond
/// to nonexistent files.
#[derive(Default)]
pub struct StrState<'a> {
    config: Option<&'a str>,
    codes: Option<&'a str>,
    sales: Option<&'a str>,
    prices: Option<&'a str>,
    categories: Option<&'a str>,
}

impl<'a> StrState<'a> {
    /// Constructs the representation of an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, s: &'a str) -> Self {
        self.config = Some(s);
        self
    }

    pub fn with_codes(mut self, s: &'a str) -> Self {
        self.codes = Some(s);
        self
    }

    pub fn with_sales(mut self, s: &'a str) -> Self {
        self.sales = Some(s);
        self
    }

    pub fn with_prices(mut self, s: &'a str) -> Self {
        self.prices = Some(s);
        self
    }

    pub fn with_categories(mut self, s: &'a str) -> Self {
        self.categories = Some(s);
        self
    }

    /// Writes string contents verbatim to `fs`. Panics if any field is not a
    /// valid serialization of a real type.
    pub fn to_fs(&self, fs: &base::Fs) {
        fn write<T>(fs: &base::Fs, field: Option<&str>)
        where
            T: std::fmt::Debug + base::fs::Io,
            <T as std::str::FromStr>::Err: std::fmt::Debug,
        {
            if let Some(s) = field {
                let obj = s.parse::<T>();
                assert!(obj.is_ok(), "{:?}", obj);
                std::fs::write(fs.path::<T>(), s).unwrap()
            }
        }

        write::<base::Config>(fs, self.config);
        write::<base::Codelist>(fs, self.codes);
        write::<base::Salelist>(fs, self.sales);
        write::<base::Pricelist>(fs, self.prices);
        write::<base::Categoryfeed>(fs, self.categories);
    }

    pub fn to_state(&self) -> State {
        let mut os = State::new();
        if let Some(s) = self.config {
            os = os.with_config(s);
        }
        if let Some(s) = self.codes {
            os = os.with_codes(s);
        }
        if let Some(s) = self.sales {
            os = os.with_sales(s);
        }
        if let Some(s) = self.prices {
            os = os.with_prices(s);
        }
        if let Some(s) = self.categories {
            os = os.with_categories(s);
        }
        os
    }
}
