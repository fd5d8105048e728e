use super::*;

qc!(find, _find);
fn _find((list, queries): (Vec<Operation<TestPrefix, i32>>, Vec<TestPrefix>)) -> bool {
    let Some((tree, model)) = apply(list) else {
        return false;
    };
    queries
        .iter()
        .all(|q| tree.find(q) == Ok(covering(&model, q).last()))
}

qc!(find_exact, _find_exact);
fn _find_exact((list, queries): (Vec<Operation<TestPrefix, i32>>, Vec<TestPrefix>)) -> bool {
    let Some((tree, model)) = apply(list) else {
        return false;
    };
    queries
        .iter()
        .all(|q| tree.find_exact(q) == model.get(q).ok_or(Error::NotFound))
}

qc!(find_all, _find_all);
fn _find_all((list, queries): (Vec<Operation<TestPrefix, i32>>, Vec<TestPrefix>)) -> bool {
    let Some((tree, model)) = apply(list) else {
        return false;
    };
    queries.iter().all(|q| {
        let want = covering(&model, q);
        let want: Vec<&i32> = want.iter().collect();
        tree.find_all(q) == Ok(want)
    })
}

qc!(find_host, _find_host);
fn _find_host((list, hosts): (Vec<Operation<TestPrefix, i32>>, Vec<u32>)) -> bool {
    let Some((tree, model)) = apply(list) else {
        return false;
    };
    hosts.into_iter().all(|h| {
        let q = TestPrefix(h, 32);
        let text = std::net::Ipv4Addr::from(h).to_string();
        tree.find_cidr(&text) == Ok(covering(&model, &q).last())
    })
}
