
error_chain!{

    links {
        Aggregation(crate::aggregation::Error, crate::aggregation::ErrorKind);
    }

    foreign_links {
        Elapsed(::tokio::time::error::Elapsed);
    }

    errors {
        NotFound(what : String) {
            description("no data for the requested entity")
            display("not found: {}", what)
        }
    }
}
