
#[cfg(test)]
mod api_tests;

#[cfg(test)]
mod load_tests;

#[cfg(test)]
mod query_tests;


#[cfg(test)]
mod update_tests;

#[cfg(test)]
mod delete_tests;

#[cfg(test)]
mod error_tests;
